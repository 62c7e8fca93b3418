//! Glue code tying the sync handle, scene, and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use sync_runtime::SyncHandle;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal::{self, TerminalGuard};
use client_frontend_core::{
    EventConsumer, Frontend, FrontendConfig, Scene, SceneEventConsumer, message::MessageLog,
};

/// Terminal frontend.
///
/// Owns nothing network-related: everything goes through the [`SyncHandle`]
/// passed to [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: SyncHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before anything else so no event slips past.
        let events = handle.subscribe();

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Connecting to server...");
        let consumer = SceneEventConsumer::new(messages);
        let scene = Scene::new(&self.frontend_config);

        let mut terminal = terminal::init()?;
        let _guard = TerminalGuard;

        let event_loop = EventLoop::new(handle, consumer, scene, self.cli_config.clone());
        let consumer = event_loop.run(events, &mut terminal).await?;

        tracing::info!(
            messages = consumer.message_log().len(),
            "CLI frontend stopped"
        );
        Ok(())
    }
}
