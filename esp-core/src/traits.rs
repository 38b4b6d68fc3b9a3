//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::button::Level;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für LED Hardware-Zugriff
///
/// Die LED spiegelt nur ein An/Aus-Flag.
///
/// # Implementierungen
/// - **Production:** RmtLed (ESP32 RMT Peripheral, WS2812)
/// - **Testing:** MockLedDriver (in-memory Mock)
pub trait LedDriver: Send {
    /// Schaltet die LED an oder aus
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set(&mut self, is_on: bool) -> Result<(), LedError>;
}

/// Trait für einen digitalen Eingang (Taster)
///
/// # Implementierungen
/// - **Production:** GpioButton (esp_hal::gpio::Input)
/// - **Testing:** ScriptedInput (vorgegebene Pegelfolge)
pub trait ButtonInput {
    /// Liest den aktuellen Rohpegel
    fn level(&mut self) -> Level;
}
