//! Errors surfaced by an arena session.
//!
//! Declined transitions are not errors here: they are logged and reported
//! through return values, since front ends disable those controls anyway.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArenaError>;

#[derive(Debug, Error)]
pub enum ArenaError {
    /// The roster listing failed; the user has to retry the session start
    #[error("failed to fetch roster")]
    RosterFetchFailed {
        #[source]
        source: anyhow::Error,
    },

    /// One selection failed; the slot stays empty and can be selected again
    #[error("failed to fetch details for {id}")]
    DetailFetchFailed {
        id: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ArenaError {
    /// Creature id of a failed detail fetch
    pub fn creature_id(&self) -> Option<&str> {
        match self {
            ArenaError::DetailFetchFailed { id, .. } => Some(id),
            ArenaError::RosterFetchFailed { .. } => None,
        }
    }
}
