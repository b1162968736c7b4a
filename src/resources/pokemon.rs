//! Pokemon resource

use super::common::NamedLink;
use crate::error::Result;
use crate::http::Sdk;
use crate::pagination::Paginator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abilities {
    pub is_hidden: bool,
    pub slot: u32,
    pub ability: NamedLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameIndices {
    pub game_index: u32,
    pub version: NamedLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionDetails {
    pub rarity: u32,
    pub version: NamedLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldItems {
    pub item: NamedLink,
    pub version_details: Vec<VersionDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionGroupDetails {
    pub level_learned_at: u32,
    pub version_group: NamedLink,
    pub move_learn_method: NamedLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Moves {
    #[serde(rename = "move")]
    pub move_: NamedLink,
    pub version_group_details: Vec<VersionGroupDetails>,
}

/// Sprite image URLs. Any of them may be missing for a given Pokemon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sprites {
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
    /// Artwork from other sources, keyed by source
    pub other: HashMap<String, Value>,
    /// Per-generation sprites, keyed by generation
    pub versions: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Types {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: NamedLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastTypes {
    pub generation: NamedLink,
    pub types: Vec<Types>,
}

/// A single Pokemon and all its associated data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub base_experience: Option<u32>,
    pub height: u32,
    pub is_default: bool,
    pub order: i32,
    pub weight: u32,
    pub abilities: Vec<Abilities>,
    pub forms: Vec<NamedLink>,
    pub game_indices: Vec<GameIndices>,
    pub held_items: Vec<HeldItems>,
    pub location_area_encounters: String,
    pub moves: Vec<Moves>,
    pub species: NamedLink,
    pub sprites: Sprites,
    pub cries: HashMap<String, Option<String>>,
    pub stats: Vec<Stats>,
    pub types: Vec<Types>,
    pub past_types: Vec<PastTypes>,
}

impl Sdk {
    /// Paginate through all Pokemon.
    ///
    /// ```rust,ignore
    /// let mut stream = sdk.list_pokemon().all();
    /// while let Some(item) = stream.next().await {
    ///     println!("Pokemon: {}", item.into_result()?.name);
    /// }
    /// ```
    pub fn list_pokemon(&self) -> Paginator<NamedLink> {
        self.paginate(self.endpoint(&["api", "v2", "pokemon"]))
    }

    /// Fetch a single Pokemon by name or id.
    ///
    /// ```rust,ignore
    /// let pikachu = sdk.get_pokemon("pikachu").await?;
    /// ```
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        self.follow(&self.endpoint(&["api", "v2", "pokemon", name]))
            .await
    }
}
