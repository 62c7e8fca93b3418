//! Adapters between the sync runtime and the game server.
//!
//! Two seams are abstracted so tests and alternative servers can plug in:
//! - [`Transport`]: request/response calls (state fetch, commands)
//! - [`PushChannel`]: persistent connection delivering pushed snapshots
mod http;
mod websocket;

pub use http::HttpTransport;
pub use websocket::{PushFrame, WebSocketPush, decode_push_frame};

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

use game_core::{Command, CommandResponse, Snapshot};

use crate::api::Result;

/// Stream of snapshots from one push connection. Ends on disconnect.
pub type SnapshotStream = Pin<Box<dyn Stream<Item = Result<Snapshot>> + Send>>;

/// Request/response access to the server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the full current state.
    async fn fetch_state(&self) -> Result<Snapshot>;

    /// Issue a named command and return the server's response body.
    ///
    /// Application-level refusals are `Ok` with `success: false`; only
    /// network and decoding problems are errors.
    async fn send_command(&self, command: Command) -> Result<CommandResponse>;
}

/// Persistent channel the server pushes snapshots over.
#[async_trait]
pub trait PushChannel: Send {
    /// Open a connection. The returned stream ends when the server or the
    /// network drops it.
    async fn connect(&mut self) -> Result<SnapshotStream>;
}
