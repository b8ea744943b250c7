//! Power formula

use crate::types::{BaseStats, CreatureDetail};

/// Weight applied to hp; every other stat counts once
pub const HP_WEIGHT: f64 = 1.5;

/// Power of an optional creature
///
/// An empty slot scores 0, so callers can preview power before both
/// slots are filled.
pub fn compute_power(creature: Option<&CreatureDetail>) -> f64 {
    creature.map(|c| stat_power(&c.stats)).unwrap_or(0.0)
}

/// `1.5 * hp + attack + defense + special-attack + special-defense + speed`
pub fn stat_power(stats: &BaseStats) -> f64 {
    HP_WEIGHT * f64::from(stats.hp)
        + f64::from(stats.attack)
        + f64::from(stats.defense)
        + f64::from(stats.special_attack)
        + f64::from(stats.special_defense)
        + f64::from(stats.speed)
}

/// Power rendered with one decimal place
pub fn format_power(power: f64) -> String {
    format!("{:.1}", power)
}
