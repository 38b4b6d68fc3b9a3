// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;
pub mod web;

// Re-exports von esp-core
pub use esp_core::{
    ButtonInput, ButtonPoller, DebounceConfig, DebouncedButton, LedCommand, LedDriver, LedError,
    LedStateMessage, LedSwitch, Level, ToggleSource,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Publisher<'static, NoopRawMutex, LedStateMessage, 4, 8, 1>
// Nutze:  LedStatePublisher

/// PubSubChannel für LED-Zustands-Broadcasts
/// - 4: Nachrichten-Kapazität im Queue
/// - 8: Maximale Anzahl Subscribers (WebSocket-Verbindungen)
/// - 1: Publisher (nur der LED-Task)
pub type LedStateChannel = PubSubChannel<NoopRawMutex, LedStateMessage, 4, 8, 1>;

/// Publisher für LED-Zustands-Broadcasts (LED-Task)
pub type LedStatePublisher = Publisher<'static, NoopRawMutex, LedStateMessage, 4, 8, 1>;

/// Subscriber für LED-Zustands-Broadcasts (je WebSocket)
pub type LedStateSubscriber = Subscriber<'static, NoopRawMutex, LedStateMessage, 4, 8, 1>;

/// Channel für LED-Kommandos (Button-Task + WebSocket → LED-Task)
/// - 4: Nachrichten-Kapazität (mehrere Sender)
pub type LedCommandChannel = embassy_sync::channel::Channel<NoopRawMutex, LedCommand, 4>;

/// Sender für LED-Kommandos
pub type LedCommandSender = Sender<'static, NoopRawMutex, LedCommand, 4>;

/// Receiver für LED-Kommandos (LED-Task empfängt)
pub type LedCommandReceiver = Receiver<'static, NoopRawMutex, LedCommand, 4>;
