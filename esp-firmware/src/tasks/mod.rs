// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels:
// Button → LED (Kommandos), HTTP/WebSocket ↔ LED (Kommandos + Zustand).

pub mod button;
pub mod http;
pub mod led;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use button::button_task;
pub use http::http_server_task;
pub use led::led_task;
pub use wifi::{connection_task, dhcp_task, net_task};
