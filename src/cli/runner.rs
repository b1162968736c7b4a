//! CLI runner - executes commands

use crate::cli::commands::{Cli, Collection, Commands, OutputFormat, ResourceKind};
use crate::config::SdkConfig;
use crate::error::{Error, Result};
use crate::http::Sdk;
use crate::resources::{Generation, Pokemon};
use futures::StreamExt;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub async fn run(&self) -> Result<()> {
        let sdk = Sdk::new(self.load_config()?)?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with(&sdk, &mut out).await
    }

    /// Run the CLI command against `sdk`, writing results to `out`
    pub async fn run_with(&self, sdk: &Sdk, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Commands::List { collection, limit } => {
                self.list(sdk, *collection, *limit, out).await
            }
            Commands::Get { kind, name } => self.get(sdk, *kind, name, out).await,
        }
    }

    /// Build the SDK config: file first, then command-line overrides
    pub fn load_config(&self) -> Result<SdkConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                SdkConfig::from_file(path)?
            }
            None => SdkConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(size) = self.cli.buffer_size {
            config.page_buffer_size = size;
        }

        config.validate()?;
        Ok(config)
    }

    async fn list(
        &self,
        sdk: &Sdk,
        collection: Collection,
        limit: Option<usize>,
        out: &mut impl Write,
    ) -> Result<()> {
        let (paginator, label) = match collection {
            Collection::Pokemon => (sdk.list_pokemon(), "Pokemon"),
            Collection::Generations => (sdk.list_generations(), "Generation"),
        };

        let (mut stream, cancel) = paginator.all_with_cancel();
        let mut listed = 0usize;

        while let Some(item) = stream.next().await {
            if limit.is_some_and(|limit| item.index >= limit) {
                // Done early, so stop the background fetches
                cancel.cancel();
                break;
            }

            let link = item.into_result()?;
            match self.cli.format {
                OutputFormat::Json => writeln!(out, "{}", to_json(&link)?)?,
                OutputFormat::Pretty => writeln!(out, "{label}: {}", link.name)?,
            }
            listed += 1;
        }

        info!("Listed {} {}", listed, label.to_lowercase());
        Ok(())
    }

    async fn get(
        &self,
        sdk: &Sdk,
        kind: ResourceKind,
        name: &str,
        out: &mut impl Write,
    ) -> Result<()> {
        match kind {
            ResourceKind::Pokemon => {
                let pokemon = sdk.get_pokemon(name).await?;
                match self.cli.format {
                    OutputFormat::Json => writeln!(out, "{}", to_json(&pokemon)?)?,
                    OutputFormat::Pretty => write_pokemon(&pokemon, out)?,
                }
            }
            ResourceKind::Generation => {
                let generation = sdk.get_generation(name).await?;
                match self.cli.format {
                    OutputFormat::Json => writeln!(out, "{}", to_json(&generation)?)?,
                    OutputFormat::Pretty => write_generation(&generation, out)?,
                }
            }
        }
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::output(format!("Failed to encode JSON: {e}")))
}

fn write_pokemon(pokemon: &Pokemon, out: &mut impl Write) -> Result<()> {
    let types: Vec<&str> = pokemon.types.iter().map(|t| t.type_.name.as_str()).collect();

    writeln!(out, "#{} {}", pokemon.id, pokemon.name)?;
    writeln!(out, "  height: {}  weight: {}", pokemon.height, pokemon.weight)?;
    writeln!(out, "  types: {}", types.join(", "))?;
    writeln!(out, "  stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "    {:<16} {}", stat.stat.name, stat.base_stat)?;
    }
    Ok(())
}

fn write_generation(generation: &Generation, out: &mut impl Write) -> Result<()> {
    writeln!(out, "#{} {}", generation.id, generation.name)?;
    writeln!(out, "  region: {}", generation.main_region.name)?;
    writeln!(
        out,
        "  species: {}  moves: {}  abilities: {}  types: {}",
        generation.pokemon_species.len(),
        generation.moves.len(),
        generation.abilities.len(),
        generation.types.len()
    )?;
    Ok(())
}
