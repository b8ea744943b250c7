//! Base statistics of a creature

use arena_protocol::{PokemonRecord, Stat};

/// The six base stats a catalog record carries
///
/// Stats missing from a record read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[cfg_attr(feature = "serde", serde(rename = "special-attack"))]
    pub special_attack: u32,
    #[cfg_attr(feature = "serde", serde(rename = "special-defense"))]
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Create stats in catalog order: hp, atk, def, spa, spd, spe
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Read stats from a catalog record
    pub fn from_protocol(record: &PokemonRecord) -> Self {
        let mut stats = Self::default();
        for stat in Stat::ALL {
            if let Some(value) = record.base_stat(stat) {
                stats.set(stat, value);
            }
        }
        stats
    }

    /// Get a single stat
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set a single stat
    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Unweighted sum of all six stats
    pub fn total(&self) -> u64 {
        Stat::ALL.iter().map(|s| u64::from(self.get(*s))).sum()
    }

    /// Iterate `(stat, value)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}
