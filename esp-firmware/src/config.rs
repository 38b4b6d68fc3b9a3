// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// GPIO-Pin für den Taster (BOOT-Taster des ESP32-C6-DevKit)
/// Intern mit Pull-Up beschaltet: gedrückt = LOW
pub const BUTTON_GPIO_PIN: u8 = 9;

/// Entprellzeit in Millisekunden
/// Der Rohpegel muss länger als diese Zeit stabil sein, bevor er zählt.
/// 0 schaltet die Entprellung ab (jedes Prellen wird ein Tastendruck)!
pub const DEBOUNCE_WINDOW_MS: u32 = esp_core::DEFAULT_DEBOUNCE_WINDOW_MS;

/// Abtast-Intervall des Tasters in Millisekunden
/// Muss deutlich kleiner als DEBOUNCE_WINDOW_MS sein
pub const BUTTON_POLL_INTERVAL_MS: u64 = 1;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Wartezeit nach WiFi-Fehler vor erneutem Versuch
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP Port
pub const HTTP_PORT: u16 = 80;

/// Anzahl paralleler HTTP-Server-Tasks
/// Muss zu `pool_size` von http_server_task passen
pub const HTTP_TASK_COUNT: usize = 4;

/// HTTP Buffer-Größe in Bytes
/// Für HTTP Request/Response Headers und Body
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// WebSocket Message Buffer-Größe in Bytes
/// {"action":"toggle"} ist 19 Bytes, 256 lässt Luft für fremde Clients
pub const WEBSOCKET_BUFFER_SIZE: usize = 256;

/// JSON Serialisierungs-Buffer für Server → Client Nachrichten
/// Für {"status":"off"} bzw. {"error":"JSON parse error"}
pub const JSON_STATUS_BUFFER_SIZE: usize = 64;
