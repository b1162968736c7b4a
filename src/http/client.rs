//! SDK handle
//!
//! Binds a [`Transport`] to a base URL and provides the request and
//! fetch-and-decode primitives the listing and detail entry points build on.

use super::transport::{HttpRequest, RawResponse, ReqwestTransport, Transport};
use crate::config::SdkConfig;
use crate::error::{Error, Result};
use crate::pagination::Paginator;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// PokeAPI client.
///
/// Cheap to clone; clones share the transport.
///
/// ```rust,ignore
/// let sdk = Sdk::new(SdkConfig::default())?;
/// let pikachu = sdk.get_pokemon("pikachu").await?;
/// ```
#[derive(Clone)]
pub struct Sdk {
    inner: Arc<SdkInner>,
}

struct SdkInner {
    base_url: Url,
    transport: Arc<dyn Transport>,
    page_buffer_size: usize,
}

impl Sdk {
    /// Create an SDK using the default reqwest transport
    pub fn new(config: SdkConfig) -> Result<Self> {
        let transport = ReqwestTransport::from_config(&config)?;
        Self::with_transport(config, transport)
    }

    /// Create an SDK around a caller-provided reqwest client.
    ///
    /// The client's own timeout and user agent apply; those in `config` are
    /// ignored.
    pub fn with_client(config: SdkConfig, client: Client) -> Result<Self> {
        Self::with_transport(config, ReqwestTransport::new(client))
    }

    /// Create an SDK around any transport
    pub fn with_transport(config: SdkConfig, transport: impl Transport + 'static) -> Result<Self> {
        let base_url = config.validate()?;
        Ok(Self {
            inner: Arc::new(SdkInner {
                base_url,
                transport: Arc::new(transport),
                page_buffer_size: config.page_buffer_size,
            }),
        })
    }

    /// Base URL all endpoints are built from
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Default buffer size for streams started from this SDK
    pub fn page_buffer_size(&self) -> usize {
        self.inner.page_buffer_size
    }

    /// Build an endpoint URL by appending percent-encoded path segments to
    /// the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.inner.base_url.clone();
        // validate() rejected cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }

    /// Make an HTTP request. Relative URLs are resolved against the base URL.
    ///
    /// Returns the raw response whatever its status; only transport failures
    /// are errors here.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<RawResponse> {
        let full_url = self.resolve(url)?;
        debug!("Request: {} {}", method, full_url);
        self.inner
            .transport
            .execute(HttpRequest::new(method, full_url, body))
            .await
    }

    /// Follow a URL and decode the JSON response into `T`.
    ///
    /// Useful for following links in API responses hypermedia-style.
    ///
    /// ```rust,ignore
    /// let thing: Thing = sdk.follow("https://example.com/things/123").await?;
    /// ```
    pub async fn follow<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.request(Method::GET, url, None).await?;
        decode_response(url, &response)
    }

    /// Start a paginator at `url`
    pub fn paginate<T>(&self, url: impl Into<String>) -> Paginator<T> {
        Paginator::new(self.clone(), url)
    }

    /// Resolve a possibly relative URL against the base URL
    fn resolve(&self, url: &str) -> Result<String> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(url.to_string());
        }
        Ok(self.inner.base_url.join(url)?.into())
    }
}

/// Map non-success statuses to `Error::Api` and decode the rest
fn decode_response<T: DeserializeOwned>(url: &str, response: &RawResponse) -> Result<T> {
    if !response.is_success() {
        warn!("GET {} returned status {}", url, response.status);
        return Err(Error::api(response.status, response.text()));
    }
    serde_json::from_slice(&response.body).map_err(Error::Decode)
}

impl std::fmt::Debug for Sdk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sdk")
            .field("base_url", &self.inner.base_url.as_str())
            .field("page_buffer_size", &self.inner.page_buffer_size)
            .finish_non_exhaustive()
    }
}
