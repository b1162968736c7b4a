//! Generation resource

use super::common::NamedLink;
use crate::error::Result;
use crate::http::Sdk;
use crate::pagination::Paginator;
use serde::{Deserialize, Serialize};

/// A localized name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Names {
    pub name: String,
    pub language: NamedLink,
}

/// A generation of Pokemon games, with the species, moves and types it
/// introduced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Generation {
    pub id: u32,
    pub name: String,
    pub abilities: Vec<NamedLink>,
    pub main_region: NamedLink,
    pub moves: Vec<NamedLink>,
    pub names: Vec<Names>,
    pub pokemon_species: Vec<NamedLink>,
    pub types: Vec<NamedLink>,
    pub version_groups: Vec<NamedLink>,
}

impl Sdk {
    /// Paginate through all generations
    pub fn list_generations(&self) -> Paginator<NamedLink> {
        self.paginate(self.endpoint(&["api", "v2", "generation"]))
    }

    /// Fetch a single generation by name or id.
    ///
    /// ```rust,ignore
    /// let gen1 = sdk.get_generation("generation-i").await?;
    /// ```
    pub async fn get_generation(&self, name: &str) -> Result<Generation> {
        self.follow(&self.endpoint(&["api", "v2", "generation", name]))
            .await
    }
}
