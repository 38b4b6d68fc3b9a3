// Taster-Eingang über esp_hal::gpio::Input

use esp_core::{ButtonInput, Level};
use esp_hal::gpio::{Input, InputConfig, Pull};

/// GPIO-Taster mit internem Pull-Up
///
/// Ruhepegel HIGH, gedrückt LOW. Die Invertierung passiert in
/// `DebounceConfig::active_level`, nicht hier.
pub struct GpioButton<'a> {
    input: Input<'a>,
}

impl<'a> GpioButton<'a> {
    pub fn new(pin: impl esp_hal::gpio::InputPin + 'a) -> Self {
        let input = Input::new(pin, InputConfig::default().with_pull(Pull::Up));
        Self { input }
    }
}

impl<'a> ButtonInput for GpioButton<'a> {
    fn level(&mut self) -> Level {
        Level::from(self.input.is_high())
    }
}
