//! Connection settings for the sync runtime.
use std::env;
use std::time::Duration;

use url::Url;

use crate::api::{Result, SyncError};

/// Socket.IO endpoint speaking Engine.IO v4 over a raw WebSocket.
const SOCKETIO_PATH: &str = "/socket.io/?EIO=4&transport=websocket";

/// Sync runtime configuration.
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Base HTTP URL of the game server (request/response API).
    pub server_url: String,
    /// Explicit push channel URL. Derived from `server_url` when absent.
    pub push_url: Option<String>,
    /// Path and query appended to the server URL when deriving the push URL.
    pub push_path: String,
    /// Delay between push channel reconnection attempts.
    pub reconnect_delay: Duration,
    /// Per-request timeout for fetches and commands.
    pub request_timeout: Duration,
    /// Capacity of the sync event broadcast channel.
    pub event_buffer: usize,
    /// Whether the push worker reconnects after the channel drops.
    pub reconnect: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            push_url: None,
            push_path: SOCKETIO_PATH.to_string(),
            reconnect_delay: Duration::from_millis(2000),
            request_timeout: Duration::from_millis(5000),
            event_buffer: 64,
            reconnect: true,
        }
    }
}

impl SyncConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARBAND_SERVER_URL` - Server base URL (default: `http://localhost:5000`)
    /// - `WARBAND_PUSH_URL` - Push channel URL (default: the server's Socket.IO endpoint)
    /// - `WARBAND_RECONNECT_DELAY_MS` - Reconnect delay (default: 2000)
    /// - `WARBAND_REQUEST_TIMEOUT_MS` - Request timeout (default: 5000)
    /// - `WARBAND_EVENT_BUFFER` - Sync event channel capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("WARBAND_SERVER_URL") {
            config.server_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(url) = env::var("WARBAND_PUSH_URL") {
            config.push_url = Some(url);
        }
        if let Some(ms) = read_env::<u64>("WARBAND_RECONNECT_DELAY_MS") {
            config.reconnect_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("WARBAND_REQUEST_TIMEOUT_MS") {
            config.request_timeout = Duration::from_millis(ms.max(1));
        }
        if let Some(capacity) = read_env::<usize>("WARBAND_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }

        config
    }

    /// Resolve a request/response endpoint such as `api/state`.
    pub fn api_url(&self, endpoint: &str) -> Result<Url> {
        let base = Url::parse(&format!("{}/", self.server_url.trim_end_matches('/')))
            .map_err(|_| SyncError::InvalidUrl(self.server_url.clone()))?;
        base.join(endpoint)
            .map_err(|_| SyncError::InvalidUrl(format!("{}/{}", self.server_url, endpoint)))
    }

    /// Resolve the push channel URL, mapping `http(s)` to `ws(s)`.
    pub fn push_endpoint(&self) -> Result<Url> {
        if let Some(push_url) = &self.push_url {
            return Url::parse(push_url).map_err(|_| SyncError::InvalidUrl(push_url.clone()));
        }

        let mut url = self.api_url(self.push_path.trim_start_matches('/'))?;
        let scheme = match url.scheme() {
            "https" | "wss" => "wss",
            _ => "ws",
        };
        url.set_scheme(scheme)
            .map_err(|_| SyncError::InvalidUrl(url.to_string()))?;
        Ok(url)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
