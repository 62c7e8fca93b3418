//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use sync_runtime::SyncHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the server through [`SyncHandle`]:
/// - Subscribe to sync events (snapshots, rejections, connection changes)
/// - Submit player commands
///
/// Frontends do NOT own the sync runtime; they receive a handle only.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use sync_runtime::SyncHandle;
/// use anyhow::Result;
///
/// struct MyFrontend;
///
/// #[async_trait]
/// impl Frontend for MyFrontend {
///     async fn run(&mut self, handle: SyncHandle) -> Result<()> {
///         let mut events = handle.subscribe();
///         while let Ok(event) = events.recv().await {
///             // Apply snapshots, render, handle input...
///             let _ = event;
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: SyncHandle) -> Result<()>;
}
