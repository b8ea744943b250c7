//! Base stat vocabulary used by the catalog

use std::fmt;

/// One of the six base statistics a catalog record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    /// All six stats in catalog order
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Parse a catalog stat name (`"special-attack"`, ...)
    ///
    /// Unknown names such as the legacy `"special"` stat yield `None`.
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(Stat::Hp),
            "attack" => Some(Stat::Attack),
            "defense" => Some(Stat::Defense),
            "special-attack" => Some(Stat::SpecialAttack),
            "special-defense" => Some(Stat::SpecialDefense),
            "speed" => Some(Stat::Speed),
            _ => None,
        }
    }

    /// Catalog stat name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special-attack",
            Stat::SpecialDefense => "special-defense",
            Stat::Speed => "speed",
        }
    }

    /// Short label for compact displays
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "ATK",
            Stat::Defense => "DEF",
            Stat::SpecialAttack => "SPA",
            Stat::SpecialDefense => "SPD",
            Stat::Speed => "SPE",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
