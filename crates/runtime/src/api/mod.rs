//! Public sync API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration, workers, or transports.

pub mod bus;
pub mod errors;
pub mod events;
pub mod handle;

pub use bus::EventBus;
pub use errors::{Result, SyncError};
pub use events::{RequestKind, SnapshotOrigin, SyncEvent};
pub use handle::SyncHandle;
