//! HTTP module
//!
//! The request primitive shared by single-resource fetches and pagination.
//!
//! # Overview
//!
//! - [`Transport`] performs one HTTP request and hands back the raw status and
//!   body. [`ReqwestTransport`] is the default implementation.
//! - [`Sdk`] binds a transport to a base URL and decodes JSON responses,
//!   mapping any status >= 300 to [`Error::Api`](crate::Error::Api).

mod client;
mod transport;

pub use client::Sdk;
pub use transport::{HttpRequest, RawResponse, ReqwestTransport, Transport};

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
