//! Transitions of the selection and resolution state machine

use super::error::InvalidTransition;
use super::event::ArenaEvent;
use super::state::{BattleState, ResolutionTicket};
use crate::types::{CreatureDetail, PlayerSlot, SelectionTicket, SlotState, Verdict};

impl BattleState {
    // === Selection ===

    /// Mark an empty slot as pending a detail fetch
    ///
    /// Pending and occupied slots are rejected and left untouched.
    pub fn begin_selection(
        &mut self,
        slot: PlayerSlot,
    ) -> Result<SelectionTicket, InvalidTransition> {
        match self.slot(slot) {
            SlotState::Occupied(_) => Err(InvalidTransition::SlotOccupied { slot }),
            SlotState::Pending(_) => Err(InvalidTransition::SlotPending { slot }),
            SlotState::Empty => {
                let ticket = SelectionTicket {
                    slot,
                    seq: self.next_seq(),
                };
                self.slots[slot.index()] = SlotState::Pending(ticket);
                Ok(ticket)
            }
        }
    }

    /// Fill a pending slot with the fetched creature
    ///
    /// Returns `None` when the ticket is stale (the slot was reset or
    /// superseded while the fetch was in flight); the state is not touched.
    pub fn complete_selection(
        &mut self,
        ticket: SelectionTicket,
        creature: CreatureDetail,
    ) -> Option<ArenaEvent> {
        if !self.holds_ticket(ticket) {
            return None;
        }

        self.slots[ticket.slot.index()] = SlotState::Occupied(creature.clone());
        Some(ArenaEvent::SlotChanged {
            slot: ticket.slot,
            creature: Some(creature),
        })
    }

    /// Return a pending slot to empty after a failed fetch
    ///
    /// Returns whether the ticket was still current.
    pub fn abandon_selection(&mut self, ticket: SelectionTicket) -> bool {
        if !self.holds_ticket(ticket) {
            return false;
        }

        self.slots[ticket.slot.index()] = SlotState::Empty;
        true
    }

    fn holds_ticket(&self, ticket: SelectionTicket) -> bool {
        matches!(self.slot(ticket.slot), SlotState::Pending(current) if *current == ticket)
    }

    // === Reset ===

    /// Clear both slots, the verdict and any resolution in progress
    ///
    /// Outstanding selection and resolution tickets become stale. Returns a
    /// `SlotChanged` with no creature for every slot that was occupied,
    /// followed by a single `Cleared`.
    pub fn reset(&mut self) -> Vec<ArenaEvent> {
        let mut events: Vec<ArenaEvent> = PlayerSlot::ALL
            .into_iter()
            .filter(|slot| self.slot(*slot).is_occupied())
            .map(|slot| ArenaEvent::SlotChanged {
                slot,
                creature: None,
            })
            .collect();
        events.push(ArenaEvent::Cleared);

        self.slots = Default::default();
        self.verdict = None;
        self.resolution = None;
        events
    }

    // === Resolution ===

    /// Start a resolution: clears the previous verdict and sets resolving
    pub fn begin_resolution(&mut self) -> Result<ResolutionTicket, InvalidTransition> {
        if self.is_resolving() {
            return Err(InvalidTransition::AlreadyResolving);
        }

        for slot in PlayerSlot::ALL {
            match self.slot(slot) {
                SlotState::Occupied(_) => {}
                SlotState::Pending(_) => return Err(InvalidTransition::SlotPending { slot }),
                SlotState::Empty => return Err(InvalidTransition::SlotEmpty { slot }),
            }
        }

        let ticket = ResolutionTicket {
            seq: self.next_seq(),
        };
        self.verdict = None;
        self.resolution = Some(ticket);
        Ok(ticket)
    }

    /// Finish a resolution, publishing the verdict and clearing resolving
    /// in the same step
    ///
    /// Returns `None` for a stale ticket.
    pub fn complete_resolution(&mut self, ticket: ResolutionTicket) -> Option<Verdict> {
        if self.resolution != Some(ticket) {
            return None;
        }
        self.resolution = None;

        let (player1, player2) = self.power_summary()?;
        let verdict = Verdict::from_powers(player1, player2);
        self.verdict = Some(verdict);
        Some(verdict)
    }
}
