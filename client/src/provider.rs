use anyhow::{Result, bail};
use async_trait::async_trait;

use arena_battle::{BaseStats, CreatureDetail, CreatureSummary};

/// Source of the selectable roster and per-creature detail.
///
/// Implementations do their own I/O and normalisation; the session adds
/// timeouts and cancellation around every call.
///
/// # Example
///
/// ```ignore
/// struct Fixed(CreatureDetail);
///
/// #[async_trait]
/// impl RosterProvider for Fixed {
///     async fn list_roster(&self) -> Result<Vec<CreatureSummary>> {
///         Ok(vec![CreatureSummary::new(&self.0.name)])
///     }
///
///     async fn fetch_detail(&self, _id: &str) -> Result<CreatureDetail> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// List every selectable creature, in display order
    async fn list_roster(&self) -> Result<Vec<CreatureSummary>>;

    /// Fetch and normalise the full record for one creature
    async fn fetch_detail(&self, id: &str) -> Result<CreatureDetail>;
}

/// In-memory provider, for offline sessions and tests
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    creatures: Vec<CreatureDetail>,
}

impl StaticRoster {
    pub fn new(creatures: impl IntoIterator<Item = CreatureDetail>) -> Self {
        Self {
            creatures: creatures.into_iter().collect(),
        }
    }

    /// A small built-in roster with catalog stats
    pub fn starters() -> Self {
        Self::new([
            CreatureDetail::new("bulbasaur", BaseStats::new(45, 49, 49, 65, 65, 45))
                .with_abilities(["overgrow", "chlorophyll"])
                .with_types(["grass", "poison"]),
            CreatureDetail::new("charmander", BaseStats::new(39, 52, 43, 60, 50, 65))
                .with_abilities(["blaze", "solar-power"])
                .with_types(["fire"]),
            CreatureDetail::new("squirtle", BaseStats::new(44, 48, 65, 50, 64, 43))
                .with_abilities(["torrent", "rain-dish"])
                .with_types(["water"]),
            CreatureDetail::new("pikachu", BaseStats::new(35, 55, 40, 50, 50, 90))
                .with_abilities(["static", "lightning-rod"])
                .with_types(["electric"]),
            CreatureDetail::new("eevee", BaseStats::new(55, 55, 50, 45, 65, 55))
                .with_abilities(["run-away", "adaptability", "anticipation"])
                .with_types(["normal"]),
            CreatureDetail::new("mewtwo", BaseStats::new(106, 110, 90, 154, 90, 130))
                .with_abilities(["pressure", "unnerve"])
                .with_types(["psychic"]),
        ])
    }

    pub fn push(&mut self, creature: CreatureDetail) {
        self.creatures.push(creature);
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

#[async_trait]
impl RosterProvider for StaticRoster {
    async fn list_roster(&self) -> Result<Vec<CreatureSummary>> {
        Ok(self
            .creatures
            .iter()
            .map(|c| CreatureSummary::new(c.name.clone()))
            .collect())
    }

    async fn fetch_detail(&self, id: &str) -> Result<CreatureDetail> {
        let wanted = id.trim();
        match self
            .creatures
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(wanted))
        {
            Some(creature) => Ok(creature.clone()),
            None => bail!("No creature named {:?} in the roster", wanted),
        }
    }
}
