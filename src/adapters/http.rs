use std::time::Duration;

use reqwest::header::{CONNECTION, CONTENT_TYPE};
use thiserror::Error;

const API_KEY_HEADER: &str = "X-API-Key";

/// One finished HTTP round-trip: status plus the raw response body. Status
/// interpretation happens a layer up.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Exchange {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub trait CommandTransport {
    fn post_json(&self, path: &str, body: &str) -> Result<Exchange, TransportError>;
    fn get(&self, path: &str) -> Result<Exchange, TransportError>;
}

/// Blocking HTTP client against the controller. Every request opens a fresh
/// connection and closes it afterwards; the shared-secret header goes on
/// every exchange. No retry happens here.
#[derive(Debug, Clone)]
pub struct ControllerHttpClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl ControllerHttpClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn execute(
        &self,
        request: reqwest::blocking::RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<Exchange, TransportError> {
        let response = request
            .header(API_KEY_HEADER, self.api_key.as_str())
            // Intermediaries may keep sockets alive even with an empty pool;
            // the explicit directive closes the door on that too.
            .header(CONNECTION, "close")
            .send()?;

        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        tracing::info!(
            method,
            url,
            status,
            body = %String::from_utf8_lossy(&body),
            "controller exchange completed"
        );

        Ok(Exchange { status, body })
    }
}

impl CommandTransport for ControllerHttpClient {
    fn post_json(&self, path: &str, body: &str) -> Result<Exchange, TransportError> {
        let url = format!("{}{path}", self.base_url);
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string());
        self.execute(request, "POST", &url)
    }

    fn get(&self, path: &str) -> Result<Exchange, TransportError> {
        let url = format!("{}{path}", self.base_url);
        self.execute(self.client.get(&url), "GET", &url)
    }
}
