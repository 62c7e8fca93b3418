//! Cloneable façade for issuing commands and streaming sync events.
//!
//! [`SyncHandle`] hides the transport and event plumbing. Command results are
//! reported twice: as the return value of [`SyncHandle::execute_command`] and
//! as a [`SyncEvent`] on the bus, so fire-and-forget callers still observe
//! them in event order.
use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use game_core::{Command, CommandOutcome, Snapshot};

use super::bus::EventBus;
use super::errors::Result;
use super::events::{RequestKind, SnapshotOrigin, SyncEvent};
use crate::transport::Transport;

/// Client-facing handle to the sync runtime.
#[derive(Clone)]
pub struct SyncHandle {
    transport: Arc<dyn Transport>,
    bus: EventBus,
}

impl SyncHandle {
    pub(crate) fn new(transport: Arc<dyn Transport>, bus: EventBus) -> Self {
        Self { transport, bus }
    }

    /// Subscribe to all sync events.
    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.bus.subscribe()
    }

    /// Dispatch a command without waiting for its result.
    ///
    /// The outcome arrives later as a [`SyncEvent`].
    pub fn send_command(&self, command: Command) -> JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            let _ = handle.execute_command(command).await;
        })
    }

    /// Execute a command and publish its outcome.
    ///
    /// Only an applied command publishes a snapshot. Rejections and transport
    /// failures publish diagnostic events and leave state untouched.
    pub async fn execute_command(&self, command: Command) -> Result<CommandOutcome> {
        tracing::debug!(%command, "Sending command");

        match self.transport.send_command(command).await {
            Ok(response) => {
                let outcome = response.into_outcome();
                match &outcome {
                    CommandOutcome::Applied(snapshot) => {
                        tracing::debug!(%command, "Command applied");
                        self.bus.publish(SyncEvent::Snapshot {
                            snapshot: snapshot.clone(),
                            origin: SnapshotOrigin::Command(command),
                        });
                    }
                    CommandOutcome::Rejected(reason) => {
                        tracing::warn!(%command, "Command rejected: {}", reason);
                        self.bus.publish(SyncEvent::CommandRejected {
                            command,
                            reason: reason.clone(),
                        });
                    }
                }
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(%command, "Failed to send command: {}", err.describe());
                self.bus.publish(SyncEvent::RequestFailed {
                    request: RequestKind::Command(command),
                    error: err.describe(),
                });
                Err(err)
            }
        }
    }

    /// Fetch the full server state and publish it as a snapshot.
    pub async fn refresh(&self) -> Result<Snapshot> {
        match self.transport.fetch_state().await {
            Ok(snapshot) => {
                self.bus.publish(SyncEvent::Snapshot {
                    snapshot: snapshot.clone(),
                    origin: SnapshotOrigin::Fetch,
                });
                Ok(snapshot)
            }
            Err(err) => {
                tracing::error!("Failed to fetch game state: {}", err.describe());
                self.bus.publish(SyncEvent::RequestFailed {
                    request: RequestKind::FetchState,
                    error: err.describe(),
                });
                Err(err)
            }
        }
    }

    /// Fetch the full state without waiting; the result arrives as an event.
    ///
    /// Late subscribers use this to catch up on the snapshot they missed.
    pub fn request_refresh(&self) -> JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            let _ = handle.refresh().await;
        })
    }

    pub(crate) fn publish(&self, event: SyncEvent) {
        self.bus.publish(event);
    }
}
