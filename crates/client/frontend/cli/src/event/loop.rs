//! Event loop orchestrating sync events, user input, and rendering.
//!
//! Two sources feed the loop:
//! - Sync events, applied to the scene as they arrive
//! - Frame ticks, each of which polls the keyboard, advances the scene once
//!   and draws it
//!
//! Both run on this one task, so a frame always sees a snapshot together with
//! its reconciled actors.

use anyhow::Result;
use sync_runtime::{SyncEvent, SyncHandle};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, MissedTickBehavior},
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui};
use client_frontend_core::{EventConsumer, Scene};

/// Event loop owning the scene and coordinating UI updates.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) handle: SyncHandle,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    /// Owned scene - mutated only by sync events and frame ticks
    pub(crate) scene: Scene,
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(handle: SyncHandle, consumer: C, scene: Scene, cli_config: CliConfig) -> Self {
        Self {
            handle,
            input: InputHandler::new(),
            consumer,
            scene,
            cli_config,
        }
    }

    pub async fn run(
        mut self,
        mut events: broadcast::Receiver<SyncEvent>,
        terminal: &mut Tui,
    ) -> Result<C> {
        // The push worker may have fetched before we subscribed.
        if self.scene.snapshot().is_none() {
            self.handle.request_refresh();
        }

        // Initial render
        self.render(terminal)?;

        let mut frames = time::interval(self.cli_config.ui.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                result = events.recv() => {
                    if self.handle_sync_event(result) {
                        break;
                    }
                }
                _ = frames.tick() => {
                    if self.handle_frame_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(self.consumer)
    }

    /// Apply one sync event to the scene. Returns whether to stop.
    fn handle_sync_event(&mut self, result: Result<SyncEvent, RecvError>) -> bool {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&mut self.scene, &event);
                if !impact.reconciled.is_empty() {
                    tracing::debug!(
                        scope = ?impact.reconciled,
                        warriors = self.scene.warriors().len(),
                        "Scene reconciled"
                    );
                }
                false
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                true
            }
            Err(RecvError::Lagged(skipped)) => {
                // Snapshots replace wholesale; the next one catches us up.
                tracing::warn!("Dropped {} stale events", skipped);
                false
            }
        }
    }
}
