
use serde::{Deserialize, Serialize};

use crate::{ParseError, Stat};

/// `{ name, url }` pair the catalog uses for every cross reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of the `/pokemon` listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPage {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// The subset of a `/pokemon/{name}` response the arena reads
///
/// Everything else in the response is ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

impl PokemonRecord {
    /// Base value of a stat, if the record lists it
    pub fn base_stat(&self, stat: Stat) -> Option<u32> {
        self.stats
            .iter()
            .find(|entry| Stat::from_protocol(&entry.stat.name) == Some(stat))
            .map(|entry| entry.base_stat)
    }

    /// Ability names in catalog order
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.iter().map(|a| a.ability.name.as_str())
    }

    /// Type names in catalog order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.kind.name.as_str())
    }
}

/// Parse a `/pokemon?limit=N` response body
pub fn parse_roster_page(body: &str) -> Result<RosterPage, ParseError> {
    let page: RosterPage = serde_json::from_str(body)?;
    Ok(page)
}

/// Parse a `/pokemon/{name}` response body
pub fn parse_pokemon(body: &str) -> Result<PokemonRecord, ParseError> {
    let record: PokemonRecord = serde_json::from_str(body)?;

    if record.name.trim().is_empty() {
        return Err(ParseError::MissingField("name".to_string()));
    }

    Ok(record)
}
