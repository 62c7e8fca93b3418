//! Push channel built on tokio-tungstenite.
//!
//! The game server publishes through Socket.IO, so frames normally arrive in
//! Engine.IO v4 framing: `0{...}` opens the session, `2` is a heartbeat, and
//! `42["game_state",{...}]` carries a snapshot. The channel answers the
//! handshake with a namespace connect (`40`) and every heartbeat with `3`.
//!
//! Plain JSON frames are accepted too, either as an event envelope
//! `{"event": "game_state", "data": <snapshot>}` or as a bare snapshot object
//! (recognized by its `resources` key). Undecodable frames are logged and
//! skipped so one bad payload never drops the connection.
use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt, stream};
use serde_json::Value;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

use game_core::Snapshot;

use super::{PushChannel, SnapshotStream};
use crate::api::{Result, SyncError};
use crate::config::SyncConfig;

const GAME_STATE_EVENT: &str = "game_state";

/// Socket.IO CONNECT for the default namespace.
const NAMESPACE_CONNECT: &str = "40";
/// Engine.IO heartbeat reply.
const HEARTBEAT_PONG: &str = "3";

/// One decoded push frame.
#[derive(Clone, Debug, PartialEq)]
pub enum PushFrame {
    /// Engine.IO session opened; the namespace still has to be joined.
    Open,
    /// Engine.IO heartbeat from the server.
    Ping,
    /// The server ended the session.
    Close,
    /// The server refused the namespace connect.
    Refused(String),
    Snapshot(Snapshot),
    /// Well-formed frame that carries no game state.
    Other,
}

pub struct WebSocketPush {
    url: Url,
}

impl WebSocketPush {
    pub fn new(config: &SyncConfig) -> Result<Self> {
        Ok(Self {
            url: config.push_endpoint()?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl PushChannel for WebSocketPush {
    async fn connect(&mut self) -> Result<SnapshotStream> {
        let (socket, _) =
            connect_async(self.url.as_str())
                .await
                .map_err(|source| SyncError::PushConnect {
                    url: self.url.to_string(),
                    source: Box::new(source),
                })?;

        let snapshots = stream::unfold(Some(socket), |state| async move {
            let mut socket = state?;
            loop {
                let text = match socket.next().await? {
                    Ok(Message::Text(text)) => text,
                    Ok(Message::Close(frame)) => {
                        tracing::debug!(?frame, "Push channel closed by server");
                        return None;
                    }
                    Ok(_) => continue,
                    Err(err) => return Some((Err(SyncError::Push(Box::new(err))), None)),
                };

                let reply = match decode_push_frame(text.as_str()) {
                    Ok(PushFrame::Snapshot(snapshot)) => {
                        return Some((Ok(snapshot), Some(socket)));
                    }
                    Ok(PushFrame::Open) => NAMESPACE_CONNECT,
                    Ok(PushFrame::Ping) => HEARTBEAT_PONG,
                    Ok(PushFrame::Close) => {
                        tracing::debug!("Push session ended by server");
                        return None;
                    }
                    Ok(PushFrame::Refused(reason)) => {
                        tracing::warn!("Push namespace refused: {}", reason);
                        return None;
                    }
                    Ok(PushFrame::Other) => continue,
                    Err(err) => {
                        tracing::warn!("Skipping undecodable push frame: {}", err);
                        continue;
                    }
                };

                if let Err(err) = socket.send(Message::text(reply)).await {
                    return Some((Err(SyncError::Push(Box::new(err))), None));
                }
            }
        });

        Ok(snapshots.boxed())
    }
}

/// Decode one push frame, in Engine.IO framing or as plain JSON.
pub fn decode_push_frame(text: &str) -> std::result::Result<PushFrame, serde_json::Error> {
    let mut chars = text.chars();
    match chars.next() {
        Some(kind) if kind.is_ascii_digit() => decode_engine_packet(kind, chars.as_str()),
        _ => decode_json_frame(serde_json::from_str(text)?),
    }
}

fn decode_engine_packet(
    kind: char,
    payload: &str,
) -> std::result::Result<PushFrame, serde_json::Error> {
    match kind {
        '0' => Ok(PushFrame::Open),
        '1' => Ok(PushFrame::Close),
        '2' => Ok(PushFrame::Ping),
        '4' => decode_socket_packet(payload),
        // pong, upgrade, noop
        _ => Ok(PushFrame::Other),
    }
}

fn decode_socket_packet(packet: &str) -> std::result::Result<PushFrame, serde_json::Error> {
    let mut chars = packet.chars();
    let Some(kind) = chars.next() else {
        return Ok(PushFrame::Other);
    };
    let body = strip_namespace_and_ack(chars.as_str());

    match kind {
        '1' => Ok(PushFrame::Close),
        '2' => {
            let args: Vec<Value> = serde_json::from_str(body)?;
            match args.first().and_then(Value::as_str) {
                Some(GAME_STATE_EVENT) => {
                    let data = args.get(1).cloned().unwrap_or(Value::Null);
                    serde_json::from_value(data).map(PushFrame::Snapshot)
                }
                _ => Ok(PushFrame::Other),
            }
        }
        '4' => Ok(PushFrame::Refused(body.to_string())),
        // connect ack, acks and binary packets
        _ => Ok(PushFrame::Other),
    }
}

/// Drops an optional `/namespace,` prefix and an optional ack id.
fn strip_namespace_and_ack(body: &str) -> &str {
    let body = match body.strip_prefix('/') {
        Some(rest) => rest.split_once(',').map_or("", |(_, rest)| rest),
        None => body,
    };
    body.trim_start_matches(|c: char| c.is_ascii_digit())
}

fn decode_json_frame(value: Value) -> std::result::Result<PushFrame, serde_json::Error> {
    match value.get("event").and_then(Value::as_str) {
        Some(GAME_STATE_EVENT) => {
            let data = value.get("data").cloned().unwrap_or(Value::Null);
            serde_json::from_value(data).map(PushFrame::Snapshot)
        }
        Some(_) => Ok(PushFrame::Other),
        None if value.get("resources").is_some() => {
            serde_json::from_value(value).map(PushFrame::Snapshot)
        }
        None => Ok(PushFrame::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_of(frame: &str) -> Snapshot {
        match decode_push_frame(frame).expect("frame should decode") {
            PushFrame::Snapshot(snapshot) => snapshot,
            other => panic!("expected a snapshot, got {other:?}"),
        }
    }

    #[test]
    fn decodes_socketio_game_state_event() {
        let snapshot = snapshot_of(r#"42["game_state",{"resources":{"gold":5,"warriors":2}}]"#);
        assert_eq!(snapshot.resources.warrior_count(), 2);
        assert_eq!(snapshot.resources.gold_display(), 5);
    }

    #[test]
    fn decodes_namespaced_event_with_ack_id() {
        let snapshot = snapshot_of(r#"42/game,7["game_state",{"battle":{"wave":6}}]"#);
        assert_eq!(snapshot.battle.wave, 6);
    }

    #[test]
    fn recognizes_engine_control_packets() {
        let open = r#"0{"sid":"abc","upgrades":[],"pingInterval":25000,"pingTimeout":20000}"#;
        assert_eq!(decode_push_frame(open).expect("open"), PushFrame::Open);
        assert_eq!(decode_push_frame("2").expect("ping"), PushFrame::Ping);
        assert_eq!(decode_push_frame("1").expect("close"), PushFrame::Close);
        assert_eq!(decode_push_frame("41").expect("disconnect"), PushFrame::Close);
        assert_eq!(
            decode_push_frame(r#"40{"sid":"xyz"}"#).expect("connect ack"),
            PushFrame::Other
        );
    }

    #[test]
    fn reports_refused_namespace() {
        let frame = decode_push_frame(r#"44{"message":"Not authorized"}"#).expect("connect error");
        assert!(matches!(frame, PushFrame::Refused(reason) if reason.contains("Not authorized")));
    }

    #[test]
    fn ignores_other_socketio_events() {
        let frame = decode_push_frame(r#"42["chat","hello"]"#).expect("event");
        assert_eq!(frame, PushFrame::Other);
    }

    #[test]
    fn decodes_game_state_envelope() {
        let snapshot =
            snapshot_of(r#"{"event":"game_state","data":{"resources":{"gold":5,"warriors":2}}}"#);
        assert_eq!(snapshot.resources.warrior_count(), 2);
    }

    #[test]
    fn decodes_bare_snapshot() {
        let snapshot = snapshot_of(r#"{"resources":{"gold":5,"warriors":4},"battle":{"wave":3}}"#);
        assert_eq!(snapshot.battle.wave, 3);
    }

    #[test]
    fn ignores_unrelated_json() {
        let frame = decode_push_frame(r#"{"event":"chat","data":"hello"}"#).expect("valid json");
        assert_eq!(frame, PushFrame::Other);
        let frame = decode_push_frame(r#"{"status":"ok"}"#).expect("valid json");
        assert_eq!(frame, PushFrame::Other);
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(decode_push_frame("{not json").is_err());
        assert!(decode_push_frame(r#"42["game_state",{"#).is_err());
    }

    #[test]
    fn push_url_targets_socketio_endpoint() {
        let push = WebSocketPush::new(&SyncConfig::default()).expect("default config is valid");
        assert_eq!(
            push.url().as_str(),
            "ws://localhost:5000/socket.io/?EIO=4&transport=websocket"
        );
    }
}
