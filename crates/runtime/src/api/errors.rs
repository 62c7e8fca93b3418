//! Unified error types surfaced by the sync API.
//!
//! Wraps failures from HTTP requests, the push channel, and payload decoding
//! so clients can log them with consistent context. None of these are fatal
//! to the client: the last known snapshot stays valid.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid server url `{0}`")]
    InvalidUrl(String),

    #[error("failed to build http client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server answered {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode server payload")]
    Decode(#[source] serde_json::Error),

    #[error("push channel connection to {url} failed")]
    PushConnect {
        url: String,
        #[source]
        source: Box<tokio_tungstenite::tungstenite::Error>,
    },

    #[error("push channel error")]
    Push(#[source] Box<tokio_tungstenite::tungstenite::Error>),

    #[error("push channel not configured")]
    MissingPushChannel,
}

impl SyncError {
    /// Renders the error with its full source chain on one line.
    pub fn describe(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }
}
