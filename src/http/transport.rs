//! Request transport
//!
//! The one seam between the SDK and the network. Everything above this layer
//! only sees a status code and a body.

use crate::config::SdkConfig;
use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

/// A single outgoing request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Optional JSON body
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    /// Create a request with an arbitrary method
    pub fn new(method: Method, url: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            url: url.into(),
            body,
        }
    }
}

/// Status and body of a completed request
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Bytes,
}

impl RawResponse {
    /// Create a response from a status and body
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Anything below 300 counts as success
    pub fn is_success(&self) -> bool {
        self.status < 300
    }

    /// Body as (lossy) UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs HTTP requests for the SDK.
///
/// Implementations must return `Ok` for every response the server produced,
/// whatever its status; `Err` is reserved for requests that could not be
/// sent or completed.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse>;
}

/// Default transport backed by a `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wrap an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the timeout and user agent in `config`
    pub fn from_config(config: &SdkConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self::new(client))
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse> {
        let mut req = self.client.request(request.method.clone(), &request.url);
        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            status,
            body.len()
        );
        Ok(RawResponse { status, body })
    }
}
