//! Integration Tests für LED-Logik und Taster-Polling
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLedDriver
//! sowie ScriptedInput statt echter GPIOs.

use esp_core::{
    ButtonInput, ButtonPoller, DebouncedButton, LedCommand, LedDriver, LedError, LedStateMessage,
    LedSwitch, Level, ToggleSource, led_color,
};
use rgb::RGB8;

// ============================================================================
// Mock LED Driver
// ============================================================================

#[derive(Default)]
pub struct MockLedDriver {
    pub last_state: Option<bool>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedDriver for MockLedDriver {
    fn set(&mut self, is_on: bool) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_state = Some(is_on);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Scripted Input
// ============================================================================

/// Liefert eine vorgegebene Pegelfolge, danach bleibt der letzte Pegel stehen
pub struct ScriptedInput {
    levels: Vec<Level>,
    position: usize,
}

impl ScriptedInput {
    pub fn new(levels: Vec<Level>) -> Self {
        Self {
            levels,
            position: 0,
        }
    }

    /// Baut eine Folge aus (Anzahl, Pegel)-Abschnitten
    pub fn from_segments(segments: &[(usize, Level)]) -> Self {
        let levels = segments
            .iter()
            .flat_map(|&(n, level)| std::iter::repeat_n(level, n))
            .collect();
        Self::new(levels)
    }
}

impl ButtonInput for ScriptedInput {
    fn level(&mut self) -> Level {
        let level = self
            .levels
            .get(self.position)
            .or(self.levels.last())
            .copied()
            .unwrap_or(Level::High);
        self.position += 1;
        level
    }
}

/// Host-Variante der Steuerschleife: Taster → LedSwitch → LED
fn run_control_loop(
    poller: &mut ButtonPoller<ScriptedInput>,
    switch: &mut LedSwitch,
    led: &mut MockLedDriver,
    cycles: u32,
) -> Vec<LedStateMessage> {
    let mut published = Vec::new();
    for now in 0..cycles {
        if let Some(command) = poller.poll(now) {
            let msg = switch.apply(command);
            led.set(msg.is_on).unwrap();
            published.push(msg);
        }
    }
    published
}

// ============================================================================
// Tests: MockLedDriver
// ============================================================================

#[test]
fn test_mock_led_driver_set() {
    let mut mock = MockLedDriver::new();

    assert_eq!(mock.write_count, 0);
    assert_eq!(mock.last_state, None);

    mock.set(true).unwrap();

    assert_eq!(mock.write_count, 1);
    assert_eq!(mock.last_state, Some(true));
}

#[test]
fn test_mock_led_driver_fail() {
    let mut mock = MockLedDriver::new();
    mock.fail_next_write = true;

    let result = mock.set(true);
    assert_eq!(result, Err(LedError::WriteFailed));
    assert_eq!(mock.write_count, 0);
    assert_eq!(mock.last_state, None);
}

#[test]
fn test_mock_led_driver_recovers_after_fail() {
    let mut mock = MockLedDriver::new();
    mock.fail_next_write = true;

    assert!(mock.set(true).is_err());
    assert!(mock.set(false).is_ok());
    assert_eq!(mock.write_count, 1);
    assert_eq!(mock.last_state, Some(false));
}

// ============================================================================
// Tests: led_color() / LedSwitch / LedCommand
// ============================================================================

#[test]
fn test_led_color_follows_flag() {
    assert_eq!(led_color(true, 10), RGB8 { r: 10, g: 10, b: 10 });
    assert_eq!(led_color(false, 10), RGB8::default());
}

#[test]
fn test_led_switch_starts_off() {
    let switch = LedSwitch::default();
    assert!(!switch.is_on());
}

#[test]
fn test_led_switch_records_source() {
    let mut switch = LedSwitch::default();
    let msg = switch.apply(LedCommand::Toggle {
        source: ToggleSource::WebClient,
    });
    assert_eq!(
        msg,
        LedStateMessage {
            is_on: true,
            source: Some(ToggleSource::WebClient),
        }
    );
    assert_eq!(msg.status_str(), "on");
}

#[test]
fn test_led_command_try_from_toggle() {
    let cmd = LedCommand::try_from("toggle");
    assert_eq!(
        cmd,
        Ok(LedCommand::Toggle {
            source: ToggleSource::WebClient
        })
    );
}

#[test]
fn test_led_command_try_from_invalid() {
    assert!(LedCommand::try_from("Toggle").is_err());
    assert!(LedCommand::try_from("blink").is_err());
}

// ============================================================================
// Tests: ButtonPoller + Steuerschleife
// ============================================================================

#[test]
fn test_poller_emits_single_toggle_for_bouncy_press() {
    let input = ScriptedInput::from_segments(&[
        (20, Level::High),
        (1, Level::Low),
        (1, Level::High),
        (2, Level::Low),
        (1, Level::High),
        (60, Level::Low),
        (3, Level::High),
        (1, Level::Low),
        (60, Level::High),
    ]);
    let mut poller = ButtonPoller::new(input, DebouncedButton::default());

    let commands: Vec<LedCommand> = (0..200).filter_map(|now| poller.poll(now)).collect();

    assert_eq!(
        commands,
        vec![LedCommand::Toggle {
            source: ToggleSource::Button
        }]
    );
    assert_eq!(poller.button().raw_state(), 0);
}

#[test]
fn test_control_loop_two_presses_toggle_led_on_and_off() {
    let input = ScriptedInput::from_segments(&[
        (20, Level::High),
        (50, Level::Low),
        (50, Level::High),
        (50, Level::Low),
        (50, Level::High),
    ]);
    let mut poller = ButtonPoller::new(input, DebouncedButton::default());
    let mut switch = LedSwitch::default();
    let mut led = MockLedDriver::new();

    let published = run_control_loop(&mut poller, &mut switch, &mut led, 220);

    assert_eq!(published.len(), 2);
    assert!(published[0].is_on);
    assert!(!published[1].is_on);
    assert!(
        published
            .iter()
            .all(|msg| msg.source == Some(ToggleSource::Button))
    );
    assert_eq!(led.write_count, 2);
    assert_eq!(led.last_state, Some(false));
}

#[test]
fn test_long_hold_toggles_only_once() {
    let input = ScriptedInput::from_segments(&[(10, Level::High), (5000, Level::Low)]);
    let mut poller = ButtonPoller::new(input, DebouncedButton::default());
    let mut switch = LedSwitch::default();
    let mut led = MockLedDriver::new();

    let published = run_control_loop(&mut poller, &mut switch, &mut led, 5010);

    assert_eq!(published.len(), 1);
    assert!(switch.is_on());
    assert!(poller.button().is_held(1000));
}
