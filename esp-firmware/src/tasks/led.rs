// LED Task - Besitzt das An/Aus-Flag und steuert die WS2812 LED
use defmt::{error, info};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{LED_BRIGHTNESS, RMT_CLOCK_MHZ};
use crate::hal::RmtLed;
use crate::{LedCommandReceiver, LedDriver, LedStatePublisher, LedSwitch};

/// LED Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Single Source of Truth für den LED-Zustand:
/// - Empfängt Kommandos vom Button-Task und von WebSockets
/// - Schaltet die LED
/// - Broadcastet den neuen Zustand an alle WebSocket-Clients
///
/// # Parameter
/// - `led`: LED Driver (Hardware oder Mock)
/// - `state_publisher`: PubSub Publisher für Zustands-Broadcasts
/// - `command_receiver`: Channel Receiver für Kommandos
pub async fn led_logic<L: LedDriver>(
    mut led: L,
    state_publisher: LedStatePublisher,
    command_receiver: LedCommandReceiver,
) -> ! {
    let mut switch = LedSwitch::new(false);

    if led.set(switch.is_on()).is_err() {
        error!("LED: Failed to write initial state");
    }

    loop {
        let command = command_receiver.receive().await;
        info!("LED: Command received: {}", command);

        let msg = switch.apply(command);

        if led.set(msg.is_on).is_err() {
            error!("LED: Failed to write to LED");
        }

        // Broadcast an alle Subscribers (älteste Nachricht fällt bei Überlauf raus)
        state_publisher.publish_immediate(msg);
        info!("LED: Published {}", msg);
    }
}

/// LED Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann `led_logic()` auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `state_publisher`: PubSub Publisher für Zustands-Broadcasts
/// - `command_receiver`: Channel Receiver für Kommandos
#[embassy_executor::task]
pub async fn led_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    state_publisher: LedStatePublisher,
    command_receiver: LedCommandReceiver,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    let led = match RmtLed::new(
        gpio8,
        rmt_peripheral,
        RMT_CLOCK_MHZ,
        LED_BRIGHTNESS,
        &mut rmt_buffer,
    ) {
        Ok(led) => led,
        Err(e) => {
            error!("LED: RMT init failed: {}", e);
            return;
        }
    };

    led_logic(led, state_publisher, command_receiver).await;
}
