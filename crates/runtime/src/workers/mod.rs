//! Worker tasks that back the sync runtime.
//!
//! The push worker owns the persistent server connection; command requests
//! are short-lived tasks spawned by [`crate::SyncHandle`].

mod push;

pub use push::PushWorker;
