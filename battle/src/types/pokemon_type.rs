//! Creature types and their badge colours

use std::fmt;

use super::creature::display_name;

/// Creature types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Catalog name and badge colour, indexed by discriminant
const TYPE_TABLE: [(Type, &str, &str); 18] = [
    (Type::Normal, "normal", "#A8A878"),
    (Type::Fire, "fire", "#F08030"),
    (Type::Water, "water", "#6890F0"),
    (Type::Electric, "electric", "#F8D030"),
    (Type::Grass, "grass", "#78C850"),
    (Type::Ice, "ice", "#98D8D8"),
    (Type::Fighting, "fighting", "#C03028"),
    (Type::Poison, "poison", "#A040A0"),
    (Type::Ground, "ground", "#E0C068"),
    (Type::Flying, "flying", "#A890F0"),
    (Type::Psychic, "psychic", "#F85888"),
    (Type::Bug, "bug", "#A8B820"),
    (Type::Rock, "rock", "#B8A038"),
    (Type::Ghost, "ghost", "#705898"),
    (Type::Dragon, "dragon", "#7038F8"),
    (Type::Dark, "dark", "#705848"),
    (Type::Steel, "steel", "#B8B8D0"),
    (Type::Fairy, "fairy", "#EE99AC"),
];

impl Type {
    /// Every type, in badge order
    pub fn all() -> impl Iterator<Item = Type> {
        TYPE_TABLE.iter().map(|(t, _, _)| *t)
    }

    /// Parse a catalog type name (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        let s = s.trim();
        TYPE_TABLE
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(s))
            .map(|(t, _, _)| *t)
    }

    /// Catalog name ("grass")
    pub fn as_str(&self) -> &'static str {
        TYPE_TABLE[*self as usize].1
    }

    /// Badge colour used when displaying this type
    pub fn color(&self) -> &'static str {
        TYPE_TABLE[*self as usize].2
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_name(self.as_str()))
    }
}

/// Badge colour for a raw type name, grey for names outside the 18 types
pub fn type_color(name: &str) -> &'static str {
    Type::from_protocol(name)
        .map(|t| t.color())
        .unwrap_or(UNKNOWN_TYPE_COLOR)
}

/// Fallback badge colour
pub const UNKNOWN_TYPE_COLOR: &str = "#777";
