//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, den entprellten Taster und Pure Functions.

#![no_std]

pub mod button;
pub mod logic;
#[cfg(feature = "serde")]
pub mod protocol;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use button::{
    ButtonState, DEFAULT_DEBOUNCE_WINDOW_MS, DebounceConfig, DebouncedButton, HELD_CEILING, Level,
    RELEASE_EDGE,
};
pub use logic::{ButtonPoller, LedSwitch, led_color};
pub use traits::{ButtonInput, LedDriver, LedError};
pub use types::{LedCommand, LedStateMessage, ToggleSource};
