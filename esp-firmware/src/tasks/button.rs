// Button Task - Tastet den BOOT-Taster ab und entprellt ihn
use defmt::info;
use embassy_time::{Duration, Instant, Ticker};

use crate::config::{BUTTON_POLL_INTERVAL_MS, DEBOUNCE_WINDOW_MS};
use crate::hal::GpioButton;
use crate::{ButtonInput, ButtonPoller, DebounceConfig, DebouncedButton, LedCommandSender, Level};

/// Button Poll Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Ruft `poll()` einmal pro Tick auf. Eine Press-Flanke wird zum
/// Toggle-Kommando an den LED-Task.
///
/// Der Zeitstempel ist `Instant::now()` in Millisekunden, auf `u32`
/// abgeschnitten. Der Überlauf nach ~49 Tagen ist unkritisch, weil der
/// Taster modular subtrahiert.
pub async fn button_poll_logic<I: ButtonInput>(
    mut poller: ButtonPoller<I>,
    command_sender: LedCommandSender,
) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(BUTTON_POLL_INTERVAL_MS));

    loop {
        let now_ms = Instant::now().as_millis() as u32;

        if let Some(command) = poller.poll(now_ms) {
            info!("Button: pressed, sending {}", command);
            command_sender.send(command).await;
        } else if poller.button().is_released_edge() {
            info!("Button: released");
        }

        ticker.next().await;
    }
}

/// Button Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `gpio9`: GPIO9 Peripheral (BOOT-Taster, aktiv LOW)
/// - `command_sender`: Channel Sender für LED-Kommandos
#[embassy_executor::task]
pub async fn button_task(
    gpio9: esp_hal::peripherals::GPIO9<'static>,
    command_sender: LedCommandSender,
) {
    let config = DebounceConfig::default()
        .with_window_ms(DEBOUNCE_WINDOW_MS)
        .with_active_level(Level::Low);
    info!("Button: Polling started ({})", config);

    let poller = ButtonPoller::new(GpioButton::new(gpio9), DebouncedButton::new(config));
    button_poll_logic(poller, command_sender).await;
}
