//! Roster entries and per-creature detail records

use arena_protocol::{NamedResource, PokemonRecord};

use super::pokemon_type::Type;
use super::stats::BaseStats;

/// Minimal roster entry, only used to populate the selectable list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureSummary {
    /// Catalog identifier (lowercase species name)
    pub name: String,

    /// Detail URL, when the provider reports one
    pub url: Option<String>,
}

impl CreatureSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Create from a catalog listing entry
    pub fn from_protocol(resource: &NamedResource) -> Self {
        Self {
            name: resource.name.clone(),
            url: (!resource.url.is_empty()).then(|| resource.url.clone()),
        }
    }

    /// Name with its first letter capitalised
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

/// Everything the arena knows about a selected creature
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureDetail {
    pub name: String,

    /// Sprite reference (URL), absent for records without artwork
    pub image: Option<String>,

    pub stats: BaseStats,

    /// Ability names in provider order, untruncated
    pub abilities: Vec<String>,

    /// Type names in provider order
    pub types: Vec<String>,
}

impl CreatureDetail {
    /// Create a detail record with no image, abilities or types
    pub fn new(name: impl Into<String>, stats: BaseStats) -> Self {
        Self {
            name: name.into(),
            image: None,
            stats,
            abilities: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Normalize a catalog record
    pub fn from_protocol(record: &PokemonRecord) -> Self {
        Self {
            name: record.name.clone(),
            image: record.sprites.front_default.clone(),
            stats: BaseStats::from_protocol(record),
            abilities: record.ability_names().map(str::to_string).collect(),
            types: record.type_names().map(str::to_string).collect(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_abilities<I, S>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities = abilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Name with its first letter capitalised
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }

    /// The first `n` abilities, for compact cards
    pub fn top_abilities(&self, n: usize) -> &[String] {
        &self.abilities[..n.min(self.abilities.len())]
    }

    /// Types that map onto the known 18; unrecognised names are skipped
    pub fn known_types(&self) -> Vec<Type> {
        self.types
            .iter()
            .filter_map(|t| Type::from_protocol(t))
            .collect()
    }

    /// Battle power of this creature
    pub fn power(&self) -> f64 {
        crate::scoring::stat_power(&self.stats)
    }
}

/// Capitalise the first character of a catalog name
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
