//! Entprellter Taster (Debounced Button)
//!
//! Tastet eine prellende Eingangsleitung in regelmäßigen Abständen ab und
//! liefert daraus einen stabilen logischen Zustand:
//!
//! | Wert            | Zustand                                   |
//! |-----------------|-------------------------------------------|
//! | `0`             | Idle (losgelassen, eingeschwungen)        |
//! | `1`             | Press-Flanke (genau ein `sample()`)       |
//! | `2..=65534`     | Gehalten, Anzahl der Abtastzyklen         |
//! | `65535`         | Release-Flanke (genau ein `sample()`)     |
//!
//! Intern wird ein Enum ([`ButtonState`]) gespeichert, die 16-Bit-Kodierung
//! ist über [`ButtonState::as_raw`] weiterhin sichtbar.
//!
//! Keine Heap-Allokation, O(1) pro Abtastung, kein eigener Timer:
//! wird `sample()` nicht aufgerufen, bleibt der Zustand stehen.

/// Standard-Entprellzeit in Millisekunden
pub const DEFAULT_DEBOUNCE_WINDOW_MS: u32 = 10;

/// Obergrenze des Halte-Zählers (sättigt hier, wird nie zur Release-Flanke)
pub const HELD_CEILING: u16 = 0xFFFE;

/// Reservierter Wert für die Release-Flanke
pub const RELEASE_EDGE: u16 = 0xFFFF;

/// Logischer Pegel einer Eingangsleitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Der jeweils andere Pegel
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(is_high: bool) -> Self {
        if is_high { Level::High } else { Level::Low }
    }
}

/// Konfiguration der Entprellung
///
/// Ein `window_ms` von 0 schaltet die Filterung praktisch ab: jedes Prellen
/// wird dann als eigener Druck/Loslassen-Vorgang gezählt. Das ist ein
/// Konfigurationsfehler des Aufrufers und wird zur Laufzeit nicht geprüft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Mindestdauer (ms), die der Rohpegel stabil sein muss
    pub window_ms: u32,
    /// Pegel, der "gedrückt" bedeutet (Pull-Up-Verdrahtung: `Low`)
    pub active_level: Level,
}

impl DebounceConfig {
    pub const fn new() -> Self {
        Self {
            window_ms: DEFAULT_DEBOUNCE_WINDOW_MS,
            active_level: Level::Low,
        }
    }

    pub const fn with_window_ms(mut self, window_ms: u32) -> Self {
        self.window_ms = window_ms;
        self
    }

    pub const fn with_active_level(mut self, active_level: Level) -> Self {
        self.active_level = active_level;
        self
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Entprellter logischer Zustand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Losgelassen und eingeschwungen
    Idle,
    /// Gerade gedrückt (ein Zyklus)
    PressEdge,
    /// Gehalten seit `n` Zyklen (2..=65534)
    Held(u16),
    /// Gerade losgelassen (ein Zyklus)
    ReleaseEdge,
}

impl ButtonState {
    /// 16-Bit-Kodierung des Zustands
    pub const fn as_raw(self) -> u16 {
        match self {
            ButtonState::Idle => 0,
            ButtonState::PressEdge => 1,
            ButtonState::Held(count) => count,
            ButtonState::ReleaseEdge => RELEASE_EDGE,
        }
    }

    /// Dekodiert die 16-Bit-Darstellung
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            0 => ButtonState::Idle,
            1 => ButtonState::PressEdge,
            RELEASE_EDGE => ButtonState::ReleaseEdge,
            count => ButtonState::Held(count),
        }
    }

    /// Ein Abtastzyklus mit dem zuletzt akzeptierten Pegel
    fn advance(self, pressed: bool) -> Self {
        match (self, pressed) {
            // Release-Flanke wird immer nach genau einem Zyklus verbraucht
            (ButtonState::ReleaseEdge, _) => ButtonState::Idle,
            (ButtonState::Idle, false) => ButtonState::Idle,
            (ButtonState::Idle, true) => ButtonState::PressEdge,
            (ButtonState::PressEdge, true) => ButtonState::Held(2),
            (ButtonState::Held(count), true) => {
                ButtonState::Held(if count < HELD_CEILING {
                    count + 1
                } else {
                    HELD_CEILING
                })
            }
            (ButtonState::PressEdge | ButtonState::Held(_), false) => ButtonState::ReleaseEdge,
        }
    }
}

/// Entprellter Taster
///
/// Wird einmal beim Start erzeugt und gehört exklusiv der Schleife, die ihn
/// abtastet. `sample()` ändert mehrere Felder nicht-atomar; bei Nutzung aus
/// mehreren Threads muss die Instanz hinter einem Mutex liegen.
///
/// # Beispiele
///
/// ```
/// # use esp_core::{DebounceConfig, DebouncedButton, Level};
/// let mut button = DebouncedButton::new(DebounceConfig::default());
///
/// // Taster gedrückt (Pull-Up: Low), 11 ms stabil
/// for now in 0..=11 {
///     button.sample(now, Level::Low);
/// }
/// assert!(button.is_pressed_edge());
///
/// button.sample(12, Level::Low);
/// assert!(!button.is_pressed_edge());
/// assert!(button.is_held(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebouncedButton {
    config: DebounceConfig,
    input_level: Level,
    last_change_ms: u32,
    accepted_pressed: bool,
    state: ButtonState,
}

impl DebouncedButton {
    /// Erstellt einen Taster im Zustand Idle
    ///
    /// Der Start-Rohpegel ist der Ruhepegel (Gegenteil von `active_level`).
    pub const fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            input_level: config.active_level.inverted(),
            last_change_ms: 0,
            accepted_pressed: false,
            state: ButtonState::Idle,
        }
    }

    /// Verarbeitet eine Abtastung der Eingangsleitung
    ///
    /// `now_ms` ist ein monoton steigender Millisekunden-Zeitstempel. Die
    /// Differenz wird modular (`wrapping_sub`) gebildet, damit der Überlauf
    /// eines 32-Bit-Zählers (nach ~49 Tagen) keine Rolle spielt.
    ///
    /// Ein Pegelwechsel wird erst übernommen, wenn der Rohpegel **länger**
    /// als `window_ms` unverändert war. Jedes Prellen startet das Fenster neu.
    pub fn sample(&mut self, now_ms: u32, raw_level: Level) {
        if raw_level != self.input_level {
            self.last_change_ms = now_ms;
        }

        if now_ms.wrapping_sub(self.last_change_ms) > self.config.window_ms {
            self.accepted_pressed = raw_level == self.config.active_level;
        }

        self.state = self.state.advance(self.accepted_pressed);
        self.input_level = raw_level;
    }

    /// `true` für genau einen Zyklus pro Tastendruck
    pub fn is_pressed_edge(&self) -> bool {
        self.state == ButtonState::PressEdge
    }

    /// `true` für genau einen Zyklus pro Loslassen
    pub fn is_released_edge(&self) -> bool {
        self.state == ButtonState::ReleaseEdge
    }

    /// `true` wenn `1 + min_cycles < Zustand < 65535`
    pub fn is_held(&self, min_cycles: u16) -> bool {
        let raw = self.state.as_raw();
        1 + u32::from(min_cycles) < u32::from(raw) && raw < RELEASE_EDGE
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Zustand in der 16-Bit-Kodierung
    pub fn raw_state(&self) -> u16 {
        self.state.as_raw()
    }

    /// Zuletzt gelesener Rohpegel
    pub fn input_level(&self) -> Level {
        self.input_level
    }

    pub fn config(&self) -> DebounceConfig {
        self.config
    }
}

impl Default for DebouncedButton {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESSED: Level = Level::Low;
    const RELEASED: Level = Level::High;

    #[test]
    fn test_new_button_is_idle() {
        let button = DebouncedButton::default();
        assert_eq!(button.state(), ButtonState::Idle);
        assert_eq!(button.input_level(), RELEASED);
        assert!(!button.is_pressed_edge());
        assert!(!button.is_released_edge());
        assert!(!button.is_held(0));
    }

    #[test]
    fn test_press_accepted_only_after_window() {
        let mut button = DebouncedButton::default();
        for now in 100..=110 {
            button.sample(now, PRESSED);
            assert_eq!(button.raw_state(), 0, "accepted too early at {}", now);
        }
        button.sample(111, PRESSED);
        assert!(button.is_pressed_edge());
    }

    #[test]
    fn test_release_edge_is_consumed_after_one_sample() {
        let mut button = DebouncedButton::default();
        for now in 0..=20 {
            button.sample(now, PRESSED);
        }
        for now in 21..=32 {
            button.sample(now, RELEASED);
        }
        assert!(button.is_released_edge());
        button.sample(33, RELEASED);
        assert_eq!(button.state(), ButtonState::Idle);
    }

    #[test]
    fn test_active_high_wiring() {
        let config = DebounceConfig::default().with_active_level(Level::High);
        let mut button = DebouncedButton::new(config);
        assert_eq!(button.input_level(), Level::Low);
        for now in 0..=11 {
            button.sample(now, Level::High);
        }
        assert!(button.is_pressed_edge());
    }

    #[test]
    fn test_held_counter_saturates() {
        let mut state = ButtonState::Held(HELD_CEILING - 1);
        state = state.advance(true);
        assert_eq!(state, ButtonState::Held(HELD_CEILING));
        state = state.advance(true);
        assert_eq!(state, ButtonState::Held(HELD_CEILING));
        assert_eq!(state.advance(false), ButtonState::ReleaseEdge);
    }

    #[test]
    fn test_raw_encoding() {
        assert_eq!(ButtonState::from_raw(0), ButtonState::Idle);
        assert_eq!(ButtonState::from_raw(1), ButtonState::PressEdge);
        assert_eq!(ButtonState::from_raw(2), ButtonState::Held(2));
        assert_eq!(ButtonState::from_raw(0xFFFE), ButtonState::Held(0xFFFE));
        assert_eq!(ButtonState::from_raw(0xFFFF), ButtonState::ReleaseEdge);
        assert_eq!(ButtonState::Held(42).as_raw(), 42);
    }

    #[test]
    fn test_is_held_with_large_min_cycles() {
        let mut button = DebouncedButton::default();
        button.state = ButtonState::Held(HELD_CEILING);
        assert!(button.is_held(HELD_CEILING - 2));
        assert!(!button.is_held(HELD_CEILING - 1));
        assert!(!button.is_held(u16::MAX));
    }
}
