//! Async arena session.
//!
//! [`ArenaSession`] wraps the [`BattleState`] machine from `arena-battle`
//! with the parts that need a runtime: detail fetches through a
//! [`RosterProvider`], the timed resolution dwell, cancellation on reset and
//! the event stream a presentation layer listens to.
//!
//! ```ignore
//! let (session, mut events) = ArenaSession::new(PokeApiProvider::new(), SessionConfig::default());
//!
//! let roster = session.list_roster().await?;
//! session.choose(&roster[0].name).await?;
//! session.choose(&roster[3].name).await?;
//!
//! if let Some(resolution) = session.battle() {
//!     println!("{:?}", resolution.verdict().await);
//! }
//! ```

pub mod config;
mod errors;
mod handler;
mod pokeapi;
mod provider;
mod receiver;
pub mod roster;
mod session;

pub use config::{
    DEFAULT_FETCH_TIMEOUT, DEFAULT_RESOLUTION_DELAY, DEFAULT_ROSTER_LIMIT, POKEAPI_URL,
    PokeApiConfig, SessionConfig,
};
pub use errors::{ArenaError, Result};
pub use handler::ArenaHandler;
pub use pokeapi::PokeApiProvider;
pub use provider::{RosterProvider, StaticRoster};
pub use receiver::{EventReceiver, dispatch_event};
pub use roster::filter_roster;
pub use session::{ArenaSession, Resolution, Selection};

pub use arena_battle::{
    ArenaEvent, BaseStats, BattleState, CreatureDetail, CreatureSummary, PlayerSlot, SlotState,
    Type, Verdict, compute_power, format_power, next_empty_slot, type_color,
};
