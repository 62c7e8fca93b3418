//! Push worker that keeps the persistent server channel alive.
//!
//! Each session: connect, announce, fetch the full state, then forward every
//! pushed snapshot until the stream ends. Between sessions the worker waits
//! for the configured delay and reconnects.

use std::time::Duration;

use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::api::{SnapshotOrigin, SyncEvent, SyncHandle};
use crate::config::SyncConfig;
use crate::transport::PushChannel;

/// Background task forwarding pushed snapshots onto the event bus.
pub struct PushWorker {
    channel: Box<dyn PushChannel>,
    handle: SyncHandle,
    reconnect: bool,
    reconnect_delay: Duration,
}

impl PushWorker {
    pub fn new(channel: Box<dyn PushChannel>, handle: SyncHandle, config: &SyncConfig) -> Self {
        Self {
            channel,
            handle,
            reconnect: config.reconnect,
            reconnect_delay: config.reconnect_delay,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            let connected = self.run_session().await;

            if !self.reconnect {
                break;
            }

            debug!(
                connected,
                "Reconnecting push channel in {:?}", self.reconnect_delay
            );
            tokio::time::sleep(self.reconnect_delay).await;
        }

        info!("Push worker stopped");
    }

    /// Runs one connection. Returns whether the channel was established.
    async fn run_session(&mut self) -> bool {
        let mut snapshots = match self.channel.connect().await {
            Ok(stream) => stream,
            Err(err) => {
                warn!("Push channel unavailable: {}", err.describe());
                return false;
            }
        };

        info!("Connected to game server");
        self.handle.publish(SyncEvent::Connected);

        // Full state first; pushes only arrive on server ticks.
        let _ = self.handle.refresh().await;

        while let Some(item) = snapshots.next().await {
            match item {
                Ok(snapshot) => self.handle.publish(SyncEvent::Snapshot {
                    snapshot,
                    origin: SnapshotOrigin::Push,
                }),
                Err(err) => warn!("Push channel error: {}", err.describe()),
            }
        }

        info!("Disconnected from game server");
        self.handle.publish(SyncEvent::Disconnected);
        true
    }
}
