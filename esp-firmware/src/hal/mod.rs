// Hardware Abstraction Layer (HAL) Module
//
// Konkrete ESP32-Implementierungen der Traits aus esp-core.
// Mocks für Tests liegen in esp-tests.

pub mod button_input;
pub mod led;

pub use button_input::GpioButton;
pub use led::RmtLed;
