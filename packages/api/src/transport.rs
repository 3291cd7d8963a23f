//! Transport seam between the typed client and the network.
//!
//! [`HttpTransport`] is the production implementation (reqwest, which rides
//! the browser's fetch on wasm). Tests substitute a recording transport so
//! "no network call" properties are observable.

use crate::error::ApiError;

/// A request about to cross the network boundary.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: reqwest::Method,
    pub url: String,
    /// Bearer token, attached as `Authorization: Bearer <token>` when set.
    pub token: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Status and raw body of a completed exchange; decoding happens upstream.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// reqwest-backed transport.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .header("Content-Type", "application/json");
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
