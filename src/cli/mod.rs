//! CLI module
//!
//! Command-line front-end for the SDK.
//!
//! # Commands
//!
//! - `list` - Stream a collection (optionally stopping after `--limit` items)
//! - `get` - Fetch a single resource by name or id

mod commands;
mod runner;

pub use commands::{Cli, Collection, Commands, OutputFormat, ResourceKind};
pub use runner::Runner;
