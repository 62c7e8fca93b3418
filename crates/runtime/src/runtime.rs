//! High-level sync orchestrator.
//!
//! The runtime owns the push worker, wires the transport into a shared
//! [`SyncHandle`], and exposes a builder-based API so callers can inject
//! their own transports.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::api::{EventBus, Result, SyncError, SyncEvent, SyncHandle};
use crate::config::SyncConfig;
use crate::transport::{HttpTransport, PushChannel, Transport, WebSocketPush};
use crate::workers::PushWorker;

/// Connection to the game server.
///
/// Design: the runtime owns the push channel and runs it in [`SyncRuntime::run`].
/// [`SyncHandle`] provides a cloneable façade for frontends.
pub struct SyncRuntime {
    config: SyncConfig,
    handle: SyncHandle,
    push: Option<Box<dyn PushChannel>>,
}

impl SyncRuntime {
    /// Create a new runtime builder
    pub fn builder() -> SyncRuntimeBuilder {
        SyncRuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> SyncHandle {
        self.handle.clone()
    }

    /// Subscribe to sync events
    pub fn subscribe_events(&self) -> broadcast::Receiver<SyncEvent> {
        self.handle.subscribe()
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Run the push worker.
    ///
    /// With reconnection enabled this only returns when the task is aborted.
    pub async fn run(&mut self) -> Result<()> {
        let channel = self.push.take().ok_or(SyncError::MissingPushChannel)?;
        PushWorker::new(channel, self.handle.clone(), &self.config)
            .run()
            .await;
        Ok(())
    }
}

/// Builder for [`SyncRuntime`] with injectable transports.
pub struct SyncRuntimeBuilder {
    config: SyncConfig,
    transport: Option<Arc<dyn Transport>>,
    push: Option<Box<dyn PushChannel>>,
}

impl SyncRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: SyncConfig::default(),
            transport: None,
            push: None,
        }
    }

    /// Override connection configuration
    pub fn config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom request/response transport (default: HTTP)
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Use a custom push channel (default: WebSocket)
    pub fn push_channel(mut self, channel: impl PushChannel + 'static) -> Self {
        self.push = Some(Box::new(channel));
        self
    }

    /// Build the runtime, filling unset transports from the configuration.
    pub fn build(self) -> Result<SyncRuntime> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.config.clone())?),
        };

        let push = match self.push {
            Some(push) => push,
            None => Box::new(WebSocketPush::new(&self.config)?),
        };

        let bus = EventBus::with_capacity(self.config.event_buffer);
        let handle = SyncHandle::new(transport, bus);

        tracing::debug!(server = %self.config.server_url, "Sync runtime built");

        Ok(SyncRuntime {
            config: self.config,
            handle,
            push: Some(push),
        })
    }
}
