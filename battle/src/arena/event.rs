//! Signals the arena emits to the presentation layer

use crate::types::{CreatureDetail, PlayerSlot, Verdict};

/// Core-to-presentation events
///
/// These are the only signals a front end should rely on; everything
/// visual is derived from them.
#[derive(Debug, Clone, PartialEq)]
pub enum ArenaEvent {
    /// A slot was filled (`Some`) or emptied by a reset (`None`)
    SlotChanged {
        slot: PlayerSlot,
        creature: Option<CreatureDetail>,
    },

    /// A resolution began; the verdict is now unset
    ResolutionStarted,

    /// A resolution finished with this verdict
    VerdictPublished(Verdict),

    /// Both slots and the verdict were cleared
    Cleared,
}
