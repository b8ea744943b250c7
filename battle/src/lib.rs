//! Creature selection, power scoring and battle resolution.
//!
//! This crate holds the rules of the arena as a synchronous state machine
//! with no clock or I/O, so every transition can be driven and tested
//! directly.
//!
//! # Overview
//!
//! `arena-battle` sits between `arena-protocol` (catalog wire format) and the
//! async session:
//!
//! ```text
//! arena-protocol (catalog records)
//!        │
//!        ▼
//! arena-battle (domain types + state machine) ← THIS CRATE
//!        │
//!        └─> arena-client (async session, timers, providers)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`CreatureSummary`] - Roster entry
//! - [`CreatureDetail`] - Normalized creature with stats, abilities and types
//! - [`BaseStats`] - The six base stats
//! - [`PlayerSlot`], [`SlotState`] - The two player positions and their contents
//! - [`Verdict`] - Battle outcome
//!
//! ## State Machine
//! - [`BattleState`] - Slots, verdict and resolver flag
//! - [`ArenaEvent`] - Signals for the presentation layer
//! - [`next_empty_slot`] - Fill-order policy for untargeted selections
//!
//! ## Scoring
//! - [`compute_power`] - `1.5 * hp` plus the other five stats
//!
//! # Example Usage
//!
//! ```
//! use arena_battle::{BaseStats, BattleState, CreatureDetail, PlayerSlot, Verdict};
//!
//! let mut state = BattleState::new();
//!
//! let slot = state.next_empty_slot().unwrap();
//! let ticket = state.begin_selection(slot).unwrap();
//! let bulbasaur = CreatureDetail::new("bulbasaur", BaseStats::new(45, 49, 49, 65, 65, 45));
//! state.complete_selection(ticket, bulbasaur);
//!
//! let ticket = state.begin_selection(PlayerSlot::Player2).unwrap();
//! let rattata = CreatureDetail::new("rattata", BaseStats::new(30, 56, 35, 25, 35, 72));
//! state.complete_selection(ticket, rattata);
//!
//! let resolution = state.begin_resolution().unwrap();
//! assert!(state.is_resolving());
//!
//! let verdict = state.complete_resolution(resolution);
//! assert_eq!(verdict, Some(Verdict::Player1Wins));
//! ```

pub mod arena;
pub mod scoring;
pub mod types;

// Re-export main types at crate root for convenience
pub use arena::{ArenaEvent, BattleState, InvalidTransition, ResolutionTicket, next_empty_slot};
pub use scoring::{compute_power, format_power, stat_power};
pub use types::{
    BaseStats, CreatureDetail, CreatureSummary, PlayerSlot, SelectionTicket, SlotState, Type,
    Verdict, display_name, type_color,
};

// Re-export commonly used protocol types
pub use arena_protocol::Stat;
