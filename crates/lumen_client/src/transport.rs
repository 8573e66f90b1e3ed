use anyhow::{bail, Context};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Command, CommandKind},
    protocol::{CommandAck, StateResponse, VisualState},
};
use url::Url;

use crate::error::FetchError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const STATE_ENDPOINT: &str = "/state";
pub const VISUAL_STATE_ENDPOINT: &str = "/lumen_visual_state";

/// The four calls the agent makes against the Lumen service.
#[async_trait]
pub trait LumenApi: Send + Sync {
    async fn fetch_state(&self) -> Result<StateResponse, FetchError>;
    async fn fetch_visual_state(&self) -> Result<VisualState, FetchError>;
    async fn send_command(&self, command: &Command) -> Result<CommandAck, FetchError>;
}

fn command_prefix(command: &Command) -> &'static str {
    match command.kind() {
        CommandKind::Mode => "mode",
        CommandKind::Scene => "scene",
    }
}

pub fn command_endpoint(command: &Command) -> String {
    format!("/{}/{}", command_prefix(command), command.value())
}

pub struct HttpLumenApi {
    http: Client,
    base_url: Url,
}

impl HttpLumenApi {
    pub fn new(server_url: &str) -> anyhow::Result<Self> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(server_url.trim())
            .with_context(|| format!("invalid Lumen server url '{server_url}'"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            bail!("server_url must start with http:// or https://");
        }
        if base_url.cannot_be_a_base() {
            bail!("server_url '{server_url}' cannot carry endpoint paths");
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl {
                endpoint: endpoint.to_string(),
                reason: "base url cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, FetchError> {
        let transport = |source| FetchError::Transport {
            endpoint: endpoint.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Format {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

#[async_trait]
impl LumenApi for HttpLumenApi {
    async fn fetch_state(&self) -> Result<StateResponse, FetchError> {
        let url = self.endpoint_url(STATE_ENDPOINT, &["state"])?;
        Self::read_json(STATE_ENDPOINT, self.http.get(url)).await
    }

    async fn fetch_visual_state(&self) -> Result<VisualState, FetchError> {
        let url = self.endpoint_url(VISUAL_STATE_ENDPOINT, &["lumen_visual_state"])?;
        Self::read_json(VISUAL_STATE_ENDPOINT, self.http.get(url)).await
    }

    async fn send_command(&self, command: &Command) -> Result<CommandAck, FetchError> {
        let endpoint = command_endpoint(command);
        let url = self.endpoint_url(&endpoint, &[command_prefix(command), command.value()])?;
        Self::read_json(&endpoint, self.http.post(url)).await
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
