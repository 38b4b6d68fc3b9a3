// HTTP Server Task - Serviert HTML und WebSocket
use core::future::pending;
use defmt::{info, warn};
use embassy_futures::select::{Either, select};
use embassy_net::Stack;
use embassy_time::Duration;
use picoserve::{io::embedded_io_async, response::IntoResponse, response::ws, routing::get};

use crate::config::*;
use crate::web::{
    INDEX_HTML,
    protocol::{WsClientMessage, WsServerMessage},
};
use crate::{LedCommand, LedCommandSender, LedStateChannel, LedStateSubscriber};

/// Response-Enum für WebSocket-Endpoint
/// Ermöglicht Rückgabe von entweder WebSocket-Upgrade oder HTTP-Fehler
enum WebSocketResponse {
    Upgrade(
        ws::UpgradedWebSocket<ws::UnspecifiedProtocol, ws::CallbackNotUsingState<WebSocketHandler>>,
    ),
    ServiceUnavailable,
}

impl IntoResponse for WebSocketResponse {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        match self {
            WebSocketResponse::Upgrade(ws) => ws.write_to(connection, response_writer).await,
            WebSocketResponse::ServiceUnavailable => {
                picoserve::response::Response::new(
                    picoserve::response::StatusCode::new(503),
                    "Service Unavailable: Too many WebSocket connections",
                )
                .with_header("Retry-After", "5")
                .write_to(connection, response_writer)
                .await
            }
        }
    }
}

/// HTTP Server Task - läuft parallel zu anderen Tasks
///
/// - Serviert index.html auf GET /
/// - WebSocket-Endpoint auf /ws: `{"action":"toggle"}` rein, `{"status":"on"|"off"}` raus
///
/// **Task Pool:** Diese Task wird HTTP_TASK_COUNT mal gespawnt, damit
/// Seite und WebSocket gleichzeitig bedient werden können.
///
/// # Parameter
/// - `task_id`: Eindeutige ID für diese Server-Instanz
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `state_channel`: PubSub Channel für LED-Zustände (jede WebSocket bekommt einen Subscriber)
/// - `command_sender`: Channel Sender für LED-Kommandos
#[embassy_executor::task(pool_size = 4)]
pub async fn http_server_task(
    task_id: usize,
    stack: &'static Stack<'static>,
    state_channel: &'static LedStateChannel,
    command_sender: LedCommandSender,
) {
    info!("HTTP: Server task {} starting on port {}...", task_id, HTTP_PORT);

    let app = picoserve::Router::new().route("/", get(serve_html)).route(
        "/ws",
        get(
            move |upgrade: picoserve::response::WebSocketUpgrade| async move {
                info!("HTTP: WebSocket upgrade requested");

                // Ohne freien Subscriber-Slot gibt es HTTP 503 statt Panic
                match state_channel.subscriber() {
                    Ok(state_subscriber) => {
                        let handler = WebSocketHandler {
                            command_sender,
                            state_subscriber,
                        };
                        WebSocketResponse::Upgrade(upgrade.on_upgrade(handler))
                    }
                    Err(_) => {
                        warn!("HTTP: No subscriber slots available, sending HTTP 503");
                        WebSocketResponse::ServiceUnavailable
                    }
                }
            },
        ),
    );

    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(5)),
    })
    .keep_connection_alive();

    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    let server = picoserve::Server::new(&app, &config, &mut http_buffer);

    let _ = server
        .listen_and_serve(task_id, *stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await;

    info!("HTTP: Server task {} ended", task_id);
}

/// Serviert die HTML-Hauptseite
async fn serve_html() -> impl IntoResponse {
    picoserve::response::Response::new(picoserve::response::StatusCode::OK, INDEX_HTML)
        .with_header("Content-Type", "text/html; charset=utf-8")
}

/// WebSocket-Handler State
struct WebSocketHandler {
    command_sender: LedCommandSender,
    state_subscriber: LedStateSubscriber,
}

impl ws::WebSocketCallback for WebSocketHandler {
    async fn run<R: embedded_io_async::Read, W: embedded_io_async::Write<Error = R::Error>>(
        mut self,
        mut rx: ws::SocketRx<R>,
        mut tx: ws::SocketTx<W>,
    ) -> Result<(), W::Error> {
        info!("HTTP: WebSocket connection established");

        let mut buffer = [0u8; WEBSOCKET_BUFFER_SIZE];

        // LED-Task soll den aktuellen Zustand broadcasten,
        // damit der neue Client sofort synchron ist
        self.command_sender.send(LedCommand::Announce).await;

        let close_reason = loop {
            match select(
                rx.next_message(&mut buffer, pending()),
                self.state_subscriber.next_message_pure(),
            )
            .await
            {
                // WebSocket-Nachricht vom Browser
                Either::First(ws_result) => match ws_result?.ignore_never_b() {
                    Ok(ws::Message::Text(data)) => {
                        info!("HTTP: Received text message: {} bytes", data.len());
                        self.handle_text(&mut tx, data).await?;
                    }
                    Ok(ws::Message::Binary(data)) => {
                        info!(
                            "HTTP: Received binary message: {} bytes (ignored)",
                            data.len()
                        );
                    }
                    Ok(ws::Message::Ping(data)) => {
                        tx.send_pong(data).await?;
                    }
                    Ok(ws::Message::Pong(_)) => {}
                    Ok(ws::Message::Close(_reason)) => {
                        info!("HTTP: WebSocket close received");
                        break None;
                    }
                    Err(error) => {
                        warn!("HTTP: WebSocket error");
                        break Some((error.code(), "WebSocket Error"));
                    }
                },
                // LED-Zustand vom PubSubChannel
                Either::Second(state) => {
                    info!("HTTP: LED is now {}, notifying client", state.status_str());
                    send_json(&mut tx, &WsServerMessage::from_state(&state)).await?;
                }
            }
        };

        info!("HTTP: WebSocket connection closed");
        tx.close(close_reason).await
    }
}

impl WebSocketHandler {
    /// Parst eine Client-Nachricht und leitet sie an den LED-Task weiter
    ///
    /// Der Browser bekommt die Antwort nicht direkt, sondern über den
    /// PubSubChannel, sobald der LED-Task umgeschaltet hat.
    async fn handle_text<W: embedded_io_async::Write>(
        &mut self,
        tx: &mut ws::SocketTx<W>,
        data: &str,
    ) -> Result<(), W::Error> {
        match serde_json_core::from_slice::<WsClientMessage>(data.as_bytes()) {
            Ok((msg, _)) => {
                let command = LedCommand::from(msg);
                info!("HTTP: Sending command to LED: {}", command);
                self.command_sender.send(command).await;
                Ok(())
            }
            Err(_) => {
                info!("HTTP: JSON parse error");
                send_json(tx, &WsServerMessage::Error("JSON parse error")).await
            }
        }
    }
}

/// Serialisiert eine Server-Nachricht und sendet sie als Text-Frame
async fn send_json<W: embedded_io_async::Write>(
    tx: &mut ws::SocketTx<W>,
    msg: &WsServerMessage,
) -> Result<(), W::Error> {
    let mut json_buffer = [0u8; JSON_STATUS_BUFFER_SIZE];
    match serde_json_core::to_slice(msg, &mut json_buffer) {
        Ok(n) => match core::str::from_utf8(&json_buffer[..n]) {
            Ok(json) => tx.send_text(json).await,
            Err(_) => Ok(()),
        },
        Err(_) => {
            warn!("HTTP: JSON buffer too small");
            Ok(())
        }
    }
}
