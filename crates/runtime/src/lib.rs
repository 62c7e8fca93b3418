//! Server synchronization runtime for the game client.
//!
//! This crate keeps the client connected to the authoritative game server:
//! it listens on a persistent push channel for state snapshots, fetches a
//! full snapshot on every (re)connect, and relays player commands as
//! request/response calls. Everything it learns is published as
//! [`SyncEvent`]s that presentation layers consume through [`SyncHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`transport`] provides the request/response and push channel adapters
//! - [`config`] loads connection settings from the environment
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod config;
pub mod runtime;
pub mod transport;

mod workers;

pub use api::{EventBus, RequestKind, Result, SnapshotOrigin, SyncError, SyncEvent, SyncHandle};
pub use config::SyncConfig;
pub use runtime::{SyncRuntime, SyncRuntimeBuilder};
pub use transport::{HttpTransport, PushChannel, SnapshotStream, Transport, WebSocketPush};
