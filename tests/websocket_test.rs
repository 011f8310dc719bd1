//! End-to-end WebSocket tests against a running server instance.

mod common;

use std::time::Duration;

use common::spawn_server;
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

type WsClient = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

async fn connect(url: &str) -> WsClient {
    let (ws, _) = connect_async(url).await.expect("Failed to connect to WebSocket");
    ws
}

async fn next_json(ws: &mut WsClient) -> Value {
    let frame = tokio::time::timeout(Duration::from_secs(5), ws.next())
        .await
        .expect("Timeout waiting for message")
        .expect("Stream ended")
        .expect("WebSocket error");
    let text = frame.into_text().expect("Expected text message");
    serde_json::from_str(&text).expect("Failed to parse JSON")
}

/// Test that a ping message receives the pong envelope.
#[tokio::test]
async fn test_ping_receives_pong_envelope() {
    let handle = spawn_server().await;
    let mut ws = connect(&handle.ws_url()).await;

    ws.send(Message::Text(json!({"message": "ping"}).to_string()))
        .await
        .expect("Failed to send message");

    let reply = next_json(&mut ws).await;
    assert_eq!(reply, json!({"status": "success", "data": "pong"}));

    handle.shutdown().await;
}

/// Test that every well-formed JSON frame gets exactly one pong.
#[tokio::test]
async fn test_every_json_frame_gets_one_pong() {
    let handle = spawn_server().await;
    let mut ws = connect(&handle.ws_url()).await;

    for payload in [
        json!({"message": "ping"}).to_string(),
        json!({"message": "hello there"}).to_string(),
        json!(42).to_string(),
        json!(["a", "b"]).to_string(),
    ] {
        ws.send(Message::Text(payload)).await.expect("Failed to send message");
        let reply = next_json(&mut ws).await;
        assert_eq!(reply, json!({"status": "success", "data": "pong"}));
    }

    handle.shutdown().await;
}

/// Test that malformed text gets a fail envelope without closing the connection.
#[tokio::test]
async fn test_malformed_frame_keeps_connection_open() {
    let handle = spawn_server().await;
    let mut ws = connect(&handle.ws_url()).await;

    ws.send(Message::Text("definitely not json".to_string()))
        .await
        .expect("Failed to send message");

    let reply = next_json(&mut ws).await;
    assert_eq!(reply["status"], "fail");
    assert_eq!(reply["data"], Value::Null);
    assert_eq!(reply["message"], "expected a JSON text message");

    // The connection must survive the malformed frame.
    ws.send(Message::Text(json!({"message": "ping"}).to_string()))
        .await
        .expect("Failed to send after malformed frame");
    let reply = next_json(&mut ws).await;
    assert_eq!(reply, json!({"status": "success", "data": "pong"}));

    handle.shutdown().await;
}

/// Test that replies come back in the order the frames were sent.
#[tokio::test]
async fn test_replies_arrive_in_request_order() {
    let handle = spawn_server().await;
    let mut ws = connect(&handle.ws_url()).await;

    ws.send(Message::Text(json!({"message": "ping"}).to_string()))
        .await
        .expect("Failed to send message");
    ws.send(Message::Text("broken".to_string()))
        .await
        .expect("Failed to send message");
    ws.send(Message::Text(json!({"message": "ping"}).to_string()))
        .await
        .expect("Failed to send message");

    assert_eq!(next_json(&mut ws).await["status"], "success");
    assert_eq!(next_json(&mut ws).await["status"], "fail");
    assert_eq!(next_json(&mut ws).await["status"], "success");

    handle.shutdown().await;
}

/// Test that concurrent connections are independent.
#[tokio::test]
async fn test_clients_do_not_share_connections() {
    let handle = spawn_server().await;
    let mut first = connect(&handle.ws_url()).await;
    let mut second = connect(&handle.ws_url()).await;

    first
        .send(Message::Text(json!({"message": "ping"}).to_string()))
        .await
        .expect("Failed to send message");

    // Only the sender gets the reply; the other connection stays quiet.
    let reply = next_json(&mut first).await;
    assert_eq!(reply["data"], "pong");

    let quiet = tokio::time::timeout(Duration::from_millis(300), second.next()).await;
    assert!(quiet.is_err());

    handle.shutdown().await;
}

/// Test that a client-initiated close is handled cleanly.
#[tokio::test]
async fn test_client_close_is_clean() {
    let handle = spawn_server().await;
    let mut ws = connect(&handle.ws_url()).await;

    ws.send(Message::Text(json!({"message": "ping"}).to_string()))
        .await
        .expect("Failed to send message");
    let _ = next_json(&mut ws).await;

    ws.close(None).await.expect("Failed to close WebSocket");

    handle.shutdown().await;
}
