//! Power scoring
//!
//! A creature's power is the single number a battle is decided on.

mod power;

pub use power::{HP_WEIGHT, compute_power, format_power, stat_power};
