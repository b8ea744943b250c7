//! The two player slots

use std::fmt;

use super::creature::CreatureDetail;

/// One of the two fixed positions a chosen creature occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl PlayerSlot {
    /// Both slots in fill order
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::Player1, PlayerSlot::Player2];

    pub fn index(&self) -> usize {
        match self {
            PlayerSlot::Player1 => 0,
            PlayerSlot::Player2 => 1,
        }
    }

    pub fn opponent(&self) -> PlayerSlot {
        match self {
            PlayerSlot::Player1 => PlayerSlot::Player2,
            PlayerSlot::Player2 => PlayerSlot::Player1,
        }
    }

    /// Human-readable label ("Player 1")
    pub fn label(&self) -> &'static str {
        match self {
            PlayerSlot::Player1 => "Player 1",
            PlayerSlot::Player2 => "Player 2",
        }
    }

    /// Parse `"1"`, `"p1"`, `"player1"` or `"player 1"` (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(' ', "").as_str() {
            "1" | "p1" | "player1" => Some(PlayerSlot::Player1),
            "2" | "p2" | "player2" => Some(PlayerSlot::Player2),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Handle for one outstanding detail fetch
///
/// A completion carrying a ticket that no longer matches the slot is stale
/// and gets discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionTicket {
    pub slot: PlayerSlot,
    pub(crate) seq: u64,
}

/// What a player slot currently holds
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SlotState {
    #[default]
    Empty,

    /// A detail fetch for this slot is in flight
    Pending(SelectionTicket),

    Occupied(CreatureDetail),
}

impl SlotState {
    pub fn is_empty(&self) -> bool {
        matches!(self, SlotState::Empty)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SlotState::Pending(_))
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, SlotState::Occupied(_))
    }

    /// The creature in this slot, if occupied
    pub fn creature(&self) -> Option<&CreatureDetail> {
        match self {
            SlotState::Occupied(detail) => Some(detail),
            _ => None,
        }
    }
}
