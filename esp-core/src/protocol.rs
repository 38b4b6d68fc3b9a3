//! WebSocket-Protokoll-Definitionen
//!
//! JSON-Nachrichten für Client ↔ Server Kommunikation:
//! - Client → Server: `{"action":"toggle"}`
//! - Server → Client: `{"status":"on"}` / `{"status":"off"}`
//! - Server → Client: `{"error":"..."}`

use serde::{Deserialize, Serialize};

use crate::types::{LedCommand, LedStateMessage, ToggleSource};

/// Aktionen, die der Browser auslösen kann
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum ClientAction {
    Toggle,
}

/// Client → Server Nachricht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WsClientMessage {
    pub action: ClientAction,
}

impl From<WsClientMessage> for LedCommand {
    fn from(msg: WsClientMessage) -> Self {
        match msg.action {
            ClientAction::Toggle => LedCommand::Toggle {
                source: ToggleSource::WebClient,
            },
        }
    }
}

/// LED-Zustand wie er im JSON steht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedStatus {
    On,
    Off,
}

impl From<bool> for LedStatus {
    fn from(is_on: bool) -> Self {
        if is_on { LedStatus::On } else { LedStatus::Off }
    }
}

/// Server → Client Nachrichten
///
/// Extern getaggt, d.h. `Status(On)` wird zu `{"status":"on"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WsServerMessage {
    Status(LedStatus),
    Error(&'static str),
}

impl WsServerMessage {
    pub fn from_state(state: &LedStateMessage) -> Self {
        WsServerMessage::Status(state.is_on.into())
    }
}
