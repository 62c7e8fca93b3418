//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use sync_runtime::SyncRuntime;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Both the runtime and the frontend are required; a missing one fails
/// `build()`.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<SyncRuntime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sync runtime (required).
    pub fn runtime(mut self, runtime: SyncRuntime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend handles UI rendering and user input. It receives a
    /// SyncHandle for communication with the server.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("Runtime is required. Use .runtime() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { runtime, frontend })
    }
}
