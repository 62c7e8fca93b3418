//! Top-level client orchestrating the sync runtime and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ SyncRuntime (server connection, push worker, command requests)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! - **Client**: Composition root, lifecycle management, layer coordination
//! - **SyncRuntime**: Keeps the push channel alive and publishes snapshots
//! - **Frontend**: Scene, rendering and input (via SyncHandle only)

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use sync_runtime::SyncRuntime;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects the runtime and the frontend
/// 2. Client::run() starts the runtime's push worker in the background
/// 3. Client::run() transfers control to the frontend (blocking)
/// 4. On frontend exit, the push worker is aborted
pub struct Client {
    runtime: SyncRuntime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend returns.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error. Runtime failures are logged only; the
    /// frontend keeps showing the last known state.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();

        // Start push worker in background
        let mut runtime = self.runtime;
        let runtime_task = tokio::spawn(async move {
            if let Err(e) = runtime.run().await {
                tracing::error!("Sync runtime error: {}", e.describe());
            }
        });

        // Run frontend (blocks until user quits)
        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        // Cleanup workers
        runtime_task.abort();
        let _ = runtime_task.await;

        frontend_result
    }
}
