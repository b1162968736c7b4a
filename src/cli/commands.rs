//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PokeAPI command-line client
#[derive(Parser, Debug)]
#[command(name = "pokeapi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Number of items to fetch ahead while listing
    #[arg(long, global = true)]
    pub buffer_size: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream every item of a collection
    List {
        /// Collection to list
        collection: Collection,

        /// Stop after this many items
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Fetch a single resource
    Get {
        /// Resource type
        kind: ResourceKind,

        /// Resource name or id
        name: String,
    },
}

/// Listable collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Collection {
    /// All Pokemon
    Pokemon,
    /// All generations
    Generations,
}

/// Fetchable resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ResourceKind {
    /// A Pokemon
    Pokemon,
    /// A generation
    Generation,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Human-readable output
    Pretty,
}
