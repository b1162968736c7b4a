//! Error types for the PokeAPI SDK
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Transport, API and decode failures are separate variants so callers can
//! tell "network broken" from "resource not found" from "bad payload".

use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {message}")]
    Transport { message: String },

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("API error: status {status}")]
    Api { status: u16, body: String },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("No more pages")]
    NoMorePages,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("Output error: {message}")]
    Output { message: String },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an API error for a non-success status
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The request could not be sent or completed
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Transport { .. })
    }

    /// The server answered with a non-success status
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// The server answered 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The body could not be decoded into the expected shape
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Single-step pagination was called after the last page
    pub fn is_no_more_pages(&self) -> bool {
        matches!(self, Error::NoMorePages)
    }

    /// Check if this error is worth retrying.
    ///
    /// The SDK never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Transport { .. } => true,
            Error::Api { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
