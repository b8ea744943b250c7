use thiserror::Error;

use crate::types::PlayerSlot;

/// An operation was attempted against a state that does not allow it
///
/// Front ends are expected to prevent these through disabled controls, so
/// callers usually log and drop them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTransition {
    #[error("{slot} is already occupied")]
    SlotOccupied { slot: PlayerSlot },

    #[error("{slot} already has a selection in flight")]
    SlotPending { slot: PlayerSlot },

    #[error("{slot} has no creature")]
    SlotEmpty { slot: PlayerSlot },

    #[error("a resolution is already in progress")]
    AlreadyResolving,
}
