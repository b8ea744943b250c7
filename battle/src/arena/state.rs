//! BattleState - the two player slots, the verdict and the resolver flag

use crate::scoring::compute_power;
use crate::types::{CreatureDetail, PlayerSlot, SlotState, Verdict};

/// Handle for the resolution in progress
///
/// Only the ticket handed out by the latest `begin_resolution` can complete
/// it; a reset in between invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolutionTicket {
    pub(crate) seq: u64,
}

/// State of one arena session
///
/// Transitions live in `transitions.rs`. The state is plain data with no
/// clock or I/O, so the async layer drives it under a lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BattleState {
    pub(crate) slots: [SlotState; 2],

    pub(crate) verdict: Option<Verdict>,

    /// Set strictly between resolution start and completion
    pub(crate) resolution: Option<ResolutionTicket>,

    /// Source of ticket sequence numbers
    pub(crate) next_seq: u64,
}

impl BattleState {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: PlayerSlot) -> &SlotState {
        &self.slots[slot.index()]
    }

    /// The creature occupying a slot, if any
    pub fn creature(&self, slot: PlayerSlot) -> Option<&CreatureDetail> {
        self.slot(slot).creature()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn is_resolving(&self) -> bool {
        self.resolution.is_some()
    }

    pub fn both_occupied(&self) -> bool {
        PlayerSlot::ALL.iter().all(|s| self.slot(*s).is_occupied())
    }

    /// Whether a battle could start right now
    pub fn can_battle(&self) -> bool {
        self.both_occupied() && !self.is_resolving()
    }

    /// Both slots empty, no verdict, not resolving
    pub fn is_clear(&self) -> bool {
        PlayerSlot::ALL.iter().all(|s| self.slot(*s).is_empty())
            && self.verdict.is_none()
            && self.resolution.is_none()
    }

    /// Power of the creature in a slot, 0 when the slot is not occupied
    pub fn power(&self, slot: PlayerSlot) -> f64 {
        compute_power(self.creature(slot))
    }

    /// `(player1, player2)` power once both slots are occupied
    pub fn power_summary(&self) -> Option<(f64, f64)> {
        self.both_occupied().then(|| {
            (
                self.power(PlayerSlot::Player1),
                self.power(PlayerSlot::Player2),
            )
        })
    }

    /// See [`next_empty_slot`]
    pub fn next_empty_slot(&self) -> Option<PlayerSlot> {
        next_empty_slot(self)
    }

    pub(crate) fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

/// First empty slot in fill order, `None` when neither is empty
///
/// A slot with a fetch in flight is not empty.
pub fn next_empty_slot(state: &BattleState) -> Option<PlayerSlot> {
    PlayerSlot::ALL
        .into_iter()
        .find(|slot| state.slot(*slot).is_empty())
}
