//! Pure Business Logic
//!
//! Funktionen und Zustandsautomaten ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::button::DebouncedButton;
use crate::traits::ButtonInput;
use crate::types::{LedCommand, LedStateMessage, ToggleSource};

/// WS2812-Farbe für den LED-Zustand
///
/// An = Weiß mit `brightness`, Aus = Schwarz.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use esp_core::led_color;
/// assert_eq!(led_color(true, 10), RGB8 { r: 10, g: 10, b: 10 });
/// assert_eq!(led_color(false, 10), RGB8 { r: 0, g: 0, b: 0 });
/// ```
pub fn led_color(is_on: bool, brightness: u8) -> RGB8 {
    if is_on {
        RGB8 {
            r: brightness,
            g: brightness,
            b: brightness,
        }
    } else {
        RGB8::default()
    }
}

/// An/Aus-Flag der LED (Single Source of Truth)
///
/// Gehört exklusiv dem LED-Task. Taster und Browser schicken nur Kommandos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedSwitch {
    is_on: bool,
}

impl LedSwitch {
    pub const fn new(is_on: bool) -> Self {
        Self { is_on }
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Wendet ein Kommando an und liefert die Nachricht für alle Subscriber
    pub fn apply(&mut self, command: LedCommand) -> LedStateMessage {
        match command {
            LedCommand::Toggle { source } => {
                self.is_on = !self.is_on;
                LedStateMessage {
                    is_on: self.is_on,
                    source: Some(source),
                }
            }
            LedCommand::Announce => LedStateMessage {
                is_on: self.is_on,
                source: None,
            },
        }
    }
}

/// Verbindet einen Eingang mit einem entprellten Taster
///
/// Pro Abtastzyklus einmal `poll()` aufrufen. Bei einer Press-Flanke
/// entsteht ein Toggle-Kommando.
pub struct ButtonPoller<I: ButtonInput> {
    input: I,
    button: DebouncedButton,
}

impl<I: ButtonInput> ButtonPoller<I> {
    pub fn new(input: I, button: DebouncedButton) -> Self {
        Self { input, button }
    }

    /// Liest den Eingang, tastet den Taster ab und liefert ggf. ein Kommando
    pub fn poll(&mut self, now_ms: u32) -> Option<LedCommand> {
        let level = self.input.level();
        self.button.sample(now_ms, level);

        self.button.is_pressed_edge().then_some(LedCommand::Toggle {
            source: ToggleSource::Button,
        })
    }

    pub fn button(&self) -> &DebouncedButton {
        &self.button
    }
}
