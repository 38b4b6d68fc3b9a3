//! Core Types für Taster/LED-Synchronisation
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Auslöser eines Umschaltvorgangs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleSource {
    /// Physischer Taster (Press-Flanke)
    Button,
    /// Browser über WebSocket
    WebClient,
}

/// LED Command für den LED-Task
///
/// Wird vom Button-Task und von WebSocket-Verbindungen gesendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    /// LED-Zustand umschalten
    Toggle { source: ToggleSource },
    /// Aktuellen Zustand erneut broadcasten (neuer WebSocket-Client)
    Announce,
}

impl core::convert::TryFrom<&str> for LedCommand {
    type Error = ();

    /// Parst einen Aktions-Namen aus dem Browser
    fn try_from(action: &str) -> Result<Self, Self::Error> {
        match action {
            "toggle" => Ok(Self::Toggle {
                source: ToggleSource::WebClient,
            }),
            _ => Err(()),
        }
    }
}

/// LED State Message für Channel-Kommunikation
///
/// Wird nach jedem Kommando vom LED-Task an alle Subscriber gebroadcastet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedStateMessage {
    pub is_on: bool,
    /// `None` bei [`LedCommand::Announce`]
    pub source: Option<ToggleSource>,
}

impl LedStateMessage {
    pub fn status_str(&self) -> &'static str {
        if self.is_on { "on" } else { "off" }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedStateMessage {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LedStateMessage {{ status: {}, source: {} }}",
            self.status_str(),
            self.source
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedCommand::Toggle { source } => {
                defmt::write!(fmt, "Toggle {{ source: {} }}", source)
            }
            LedCommand::Announce => {
                defmt::write!(fmt, "Announce")
            }
        }
    }
}
