//! WebSocket endpoint.
//!
//! Every well-formed JSON text frame gets a pong envelope back, whatever
//! the JSON says. Frames that fail to parse get a fail envelope instead;
//! the connection stays open either way. Binary, ping, and pong frames
//! are left to the protocol layer.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use serde_json::Value;

use crate::envelope::Envelope;

/// `GET /ws` - upgrade the connection and hand it to the echo loop.
pub async fn upgrade(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    tracing::debug!("WebSocket client connected");

    while let Some(received) = socket.recv().await {
        let message = match received {
            Ok(message) => message,
            Err(error) => {
                tracing::warn!("WebSocket receive error: {}", error);
                break;
            }
        };

        match message {
            Message::Text(text) => {
                let reply = reply_for(&text);
                let json = match serde_json::to_string(&reply) {
                    Ok(json) => json,
                    Err(error) => {
                        tracing::error!("Failed to encode WebSocket reply: {}", error);
                        continue;
                    }
                };
                if socket.send(Message::Text(json)).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    tracing::debug!("WebSocket client disconnected");
}

/// One reply per text frame: pong for any JSON, a fail envelope otherwise.
fn reply_for(text: &str) -> Envelope<&'static str> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => {
            if value.get("message").and_then(Value::as_str) == Some("ping") {
                tracing::debug!("Ping message received");
            }
            Envelope::success("pong")
        }
        Err(error) => {
            tracing::debug!("Discarding malformed WebSocket frame: {}", error);
            Envelope::fail("expected a JSON text message")
        }
    }
}
