//! # PokeAPI SDK
//!
//! A typed client for the paginated, hypermedia-style PokeAPI.
//!
//! ## Features
//!
//! - **Typed resources**: Pokemon, generations, and the named links between them
//! - **Link following**: Fetch any resource URL found in a response
//! - **Background pagination**: Stream whole listings while the next pages are
//!   fetched ahead in a bounded buffer
//! - **Cancellation**: Stop a stream's background fetches at any time
//! - **Pluggable transport**: Bring your own `reqwest::Client` or `Transport`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use pokeapi_sdk::{Result, Sdk, SdkConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let sdk = Sdk::new(SdkConfig::default())?;
//!
//!     // Print up to 50 Pokemon names
//!     let (mut stream, cancel) = sdk.list_pokemon().all_with_cancel();
//!     while let Some(item) = stream.next().await {
//!         if item.index >= 50 {
//!             cancel.cancel();
//!             break;
//!         }
//!         println!("Pokemon: {}", item.into_result()?.name);
//!     }
//!
//!     let pikachu = sdk.get_pokemon("pikachu").await?;
//!     println!("{:?}", pikachu.stats);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Sdk: list_pokemon() list_generations() get_pokemon() ...    │
//! └──────────────────────────────────────────────────────────────┘
//!                │                                 │
//! ┌──────────────┴──────────────┐   ┌──────────────┴─────────────┐
//! │ Paginator<T>                │   │ Sdk::follow<T>             │
//! │  next()  -> Page<T>         │   │  GET + decode one object   │
//! │  all()   -> PageStream<T>   │   └──────────────┬─────────────┘
//! │   (task + bounded channel)  │                  │
//! └──────────────┬──────────────┘                  │
//!                └───────────────┬─────────────────┘
//!                    ┌───────────┴───────────┐
//!                    │ Transport (reqwest)   │
//!                    └───────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document resource struct fields before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// SDK configuration
pub mod config;

/// Transport and request primitives
pub mod http;

/// Paginator, page types and background streams
pub mod pagination;

/// Typed API resources and their entry points
pub mod resources;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SdkConfig;
pub use error::{Error, Result};
pub use http::{Sdk, Transport};
pub use pagination::{CancelHandle, IteratorResult, Page, PageStream, Paginator};
pub use resources::{Generation, NamedLink, Pokemon};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
