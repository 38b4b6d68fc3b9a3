// Web-Modul für HTTP Server und WebSocket
// Organisiert alle Web-bezogenen Komponenten

// JSON-Nachrichten liegen in esp-core (host-testbar)
pub use esp_core::protocol;

// HTML-Datei zur Compile-Zeit einbinden
// Die Datei wird direkt ins Binary eingebettet (kein Dateisystem nötig)
pub const INDEX_HTML: &str = include_str!("index.html");
