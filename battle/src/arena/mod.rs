//! Selection and resolution state machine

mod error;
mod event;
mod state;
mod transitions;

pub use error::InvalidTransition;
pub use event::ArenaEvent;
pub use state::{BattleState, ResolutionTicket, next_empty_slot};
