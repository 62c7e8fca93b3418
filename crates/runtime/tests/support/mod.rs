//! In-memory transports for exercising the sync runtime without a server.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::{StreamExt, stream};

use game_core::{Battle, Command, CommandResponse, Resources, Snapshot};
use sync_runtime::{PushChannel, Result, SnapshotStream, SyncError, Transport};

/// Scripted reply for one command.
#[derive(Clone)]
pub enum MockReply {
    Respond(CommandResponse),
    Unavailable,
}

/// Request/response transport backed by shared in-memory state.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<Option<Snapshot>>>,
    replies: Arc<Mutex<HashMap<Command, MockReply>>>,
    calls: Arc<Mutex<Vec<Command>>>,
}

impl MockTransport {
    pub fn with_state(snapshot: Snapshot) -> Self {
        let transport = Self::default();
        *transport.state.lock().unwrap() = Some(snapshot);
        transport
    }

    pub fn reply(&self, command: Command, reply: MockReply) {
        self.replies.lock().unwrap().insert(command, reply);
    }

    pub fn calls(&self) -> Vec<Command> {
        self.calls.lock().unwrap().clone()
    }
}

fn unavailable() -> SyncError {
    SyncError::Status {
        url: "mock://server".to_string(),
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch_state(&self) -> Result<Snapshot> {
        self.state.lock().unwrap().clone().ok_or_else(unavailable)
    }

    async fn send_command(&self, command: Command) -> Result<CommandResponse> {
        self.calls.lock().unwrap().push(command);
        let reply = self.replies.lock().unwrap().get(&command).cloned();
        match reply {
            Some(MockReply::Respond(response)) => Ok(response),
            Some(MockReply::Unavailable) | None => Err(unavailable()),
        }
    }
}

/// Push channel replaying one scripted list of snapshots per connection.
pub struct ScriptedPush {
    sessions: VecDeque<Vec<Snapshot>>,
}

impl ScriptedPush {
    pub fn new(sessions: Vec<Vec<Snapshot>>) -> Self {
        Self {
            sessions: sessions.into(),
        }
    }
}

#[async_trait]
impl PushChannel for ScriptedPush {
    async fn connect(&mut self) -> Result<SnapshotStream> {
        let session = self
            .sessions
            .pop_front()
            .ok_or_else(|| SyncError::InvalidUrl("mock://offline".to_string()))?;
        Ok(stream::iter(session.into_iter().map(Ok)).boxed())
    }
}

pub fn snapshot(gold: f64, warriors: f64, wave: u32, in_combat: bool) -> Snapshot {
    Snapshot {
        resources: Resources { gold, warriors },
        battle: Battle {
            wave,
            in_combat,
            ..Battle::default()
        },
        ..Snapshot::default()
    }
}
