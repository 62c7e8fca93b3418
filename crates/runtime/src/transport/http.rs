//! HTTP request/response transport built on reqwest.
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use game_core::{Command, CommandResponse, Snapshot};

use super::Transport;
use crate::api::{Result, SyncError};
use crate::config::SyncConfig;

/// Thin wrapper around reqwest for the game server's JSON API.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
    config: SyncConfig,
}

impl HttpTransport {
    pub fn new(config: SyncConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(SyncError::ClientBuild)?;
        Ok(Self { http, config })
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await.map_err(|source| SyncError::Request {
            url: url.to_string(),
            source,
        })?;

        match serde_json::from_slice::<T>(&body) {
            Ok(value) => Ok(value),
            // Keep upstream status when the body is not ours to decode.
            Err(_) if !status.is_success() => Err(SyncError::Status {
                url: url.to_string(),
                status,
            }),
            Err(err) => Err(SyncError::Decode(err)),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_state(&self) -> Result<Snapshot> {
        let url = self.config.api_url("api/state")?;
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| SyncError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SyncError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Self::decode(url.as_str(), response).await
    }

    async fn send_command(&self, command: Command) -> Result<CommandResponse> {
        let url = self.config.api_url(&format!("api/{}", command.name()))?;
        let response = self
            .http
            .post(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| SyncError::Request {
                url: url.to_string(),
                source,
            })?;

        // Refusals come back as 400 with a JSON body, so decode regardless of status.
        Self::decode(url.as_str(), response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://localhost:5000/api/buy_warrior";

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        http::Response::builder()
            .status(status)
            .body(body)
            .expect("valid response")
            .into()
    }

    #[tokio::test]
    async fn rejection_body_decodes_despite_client_error() {
        let reply = response(400, r#"{"success": false, "error": "Not enough gold"}"#);
        let body: CommandResponse = HttpTransport::decode(URL, reply)
            .await
            .expect("400 body is an application answer");
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Not enough gold"));
    }

    #[tokio::test]
    async fn undecodable_error_body_keeps_status() {
        let reply = response(503, "<html><body>Service Unavailable</body></html>");
        let err = HttpTransport::decode::<CommandResponse>(URL, reply)
            .await
            .expect_err("html is not a command response");
        assert!(matches!(
            err,
            SyncError::Status { status, .. } if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn garbage_success_body_is_a_decode_error() {
        let reply = response(200, "definitely not json");
        let err = HttpTransport::decode::<Snapshot>(URL, reply)
            .await
            .expect_err("garbage should not decode");
        assert!(matches!(err, SyncError::Decode(_)));
    }
}
