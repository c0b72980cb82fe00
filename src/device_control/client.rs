//! HTTP access to the MythTV Frontend service API (default port 6547).

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::FrontendError;

/// Blocking JSON client bound to one frontend
#[derive(Debug, Clone)]
pub struct FrontendClient {
    client: Client,
    base_url: String,
}

impl FrontendClient {
    pub const DEFAULT_PORT: u16 = 6547;
    const TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(host: &str, port: u16) -> Result<Self, FrontendError> {
        Self::with_timeout(host, port, Self::TIMEOUT)
    }

    pub fn with_timeout(host: &str, port: u16, timeout: Duration) -> Result<Self, FrontendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FrontendError::Client)?;

        Ok(Self {
            client,
            base_url: format!("http://{}:{}", host, port),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// GET an endpoint and decode its JSON body
    pub fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FrontendError> {
        let request = self.client.get(self.url(endpoint));
        Self::execute(endpoint, request)
    }

    /// POST a JSON body to an endpoint and decode its JSON reply
    pub fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, FrontendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(endpoint)).json(body);
        Self::execute(endpoint, request)
    }

    fn execute<T: DeserializeOwned>(
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, FrontendError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| FrontendError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FrontendError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let text = response.text().map_err(|source| FrontendError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;
        debug!("{} response: {}", endpoint, text);

        serde_json::from_str(&text).map_err(|e| FrontendError::InvalidResponse {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}
