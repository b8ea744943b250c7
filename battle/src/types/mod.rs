//! Domain types for the arena

mod creature;
mod pokemon_type;
mod slot;
mod stats;
mod verdict;

pub use creature::{CreatureDetail, CreatureSummary, display_name};
pub use pokemon_type::{Type, UNKNOWN_TYPE_COLOR, type_color};
pub use slot::{PlayerSlot, SelectionTicket, SlotState};
pub use stats::BaseStats;
pub use verdict::Verdict;
