// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

// Logging
use defmt::info;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_ws_button::config::{
    BUTTON_GPIO_PIN, DEBOUNCE_WINDOW_MS, EXTRA_HEAP_SIZE, HTTP_TASK_COUNT, LED_GPIO_PIN,
    WIFI_HEAP_SIZE,
};
use esp_ws_button::tasks::{
    button_task, connection_task, dhcp_task, http_server_task, led_task, net_task,
};
use esp_ws_button::{LedCommandChannel, LedStateChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, WiFi, startet Embassy Runtime und spawnt Tasks
/// (LED, Taster, WiFi, HTTP/WebSocket).
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    // Zwei Bereiche: reclaimed RAM (64 KB) + extra (36 KB) = 100 KB total
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // WiFi Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Netzwerk-Stack erstellen
    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Static resources für embassy-net
    // HTTP-Listener (HTTP_TASK_COUNT) + DHCP + DNS
    static RESOURCES: static_cell::StaticCell<StackResources<6>> = static_cell::StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    // embassy-net erstellt Stack + Runner (nutzt STA interface für Client-Modus)
    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    // Stack muss 'static sein für Tasks
    static STACK: static_cell::StaticCell<Stack<'static>> = static_cell::StaticCell::new();
    let stack = &*STACK.init(stack);

    // LED Zustands-Channel (LED → alle WebSockets)
    // PubSubChannel für Broadcast: alle Subscribers bekommen jede Nachricht
    static STATE_CHANNEL: static_cell::StaticCell<LedStateChannel> = static_cell::StaticCell::new();
    let state_channel = &*STATE_CHANNEL.init(LedStateChannel::new());
    let state_publisher = state_channel
        .publisher()
        .expect("LED state channel has no publisher slot");

    // LED Command-Channel (Button + WebSockets → LED)
    static COMMAND_CHANNEL: static_cell::StaticCell<LedCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = COMMAND_CHANNEL.init(LedCommandChannel::new());
    let command_sender = command_channel.sender();
    let command_receiver = command_channel.receiver();

    // Spawn LED Task (einziger Besitzer des LED-Zustands)
    info!("Main: LED on GPIO{}", LED_GPIO_PIN);
    spawner
        .spawn(led_task(
            peripherals.GPIO8,
            peripherals.RMT,
            state_publisher,
            command_receiver,
        ))
        .expect("Failed to spawn LED task");

    // Spawn Button Task (Taster abtasten, Press-Flanke → Toggle)
    info!(
        "Main: Button on GPIO{}, debounce {} ms",
        BUTTON_GPIO_PIN, DEBOUNCE_WINDOW_MS
    );
    spawner
        .spawn(button_task(peripherals.GPIO9, command_sender))
        .expect("Failed to spawn button task");

    // Spawn WiFi Tasks
    spawner
        .spawn(connection_task(wifi_controller))
        .expect("Failed to spawn WiFi connection task");
    spawner
        .spawn(net_task(runner))
        .expect("Failed to spawn network task");
    spawner
        .spawn(dhcp_task(stack))
        .expect("Failed to spawn DHCP task");

    // Spawn HTTP Server Tasks (mehrere für concurrent connections)
    for task_id in 0..HTTP_TASK_COUNT {
        spawner
            .spawn(http_server_task(
                task_id,
                stack,
                state_channel,
                command_sender,
            ))
            .expect("Failed to spawn HTTP server task");
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
