// WS2812 LED über das RMT Peripheral
//
// Die LED spiegelt nur das An/Aus-Flag des LED-Tasks.

use esp_core::{LedDriver, LedError, led_color};
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds_trait::SmartLedsWrite;

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const LED_BUFFER_SIZE: usize = 25;

/// Real Hardware LED
///
/// Hinweis: Der Buffer muss länger leben als der Adapter, daher wird er im
/// Task erstellt und als Parameter übergeben.
pub struct RmtLed<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    brightness: u8,
}

impl<'a> RmtLed<'a> {
    /// Erstellt eine neue RmtLed
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `brightness`: Helligkeit im Zustand "an"
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    ///
    /// # Fehlerbehandlung
    /// `LedError::WriteFailed` wenn das RMT Peripheral nicht konfiguriert werden kann
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        brightness: u8,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led, brightness })
    }
}

impl<'a> LedDriver for RmtLed<'a> {
    fn set(&mut self, is_on: bool) -> Result<(), LedError> {
        self.led
            .write([led_color(is_on, self.brightness)].into_iter())
            .map_err(|_| LedError::WriteFailed)
    }
}
