//! Battle outcome

use std::fmt;

use super::slot::PlayerSlot;

/// Outcome of one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Player1Wins,
    Player2Wins,
    Draw,
}

impl Verdict {
    /// Compare two power values exactly; equal values are a draw
    pub fn from_powers(player1: f64, player2: f64) -> Self {
        if player1 > player2 {
            Verdict::Player1Wins
        } else if player2 > player1 {
            Verdict::Player2Wins
        } else {
            Verdict::Draw
        }
    }

    /// Winning slot, `None` on a draw
    pub fn winner(&self) -> Option<PlayerSlot> {
        match self {
            Verdict::Player1Wins => Some(PlayerSlot::Player1),
            Verdict::Player2Wins => Some(PlayerSlot::Player2),
            Verdict::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Verdict::Draw)
    }

    /// Short label: the winner's label or "Draw"
    pub fn label(&self) -> &'static str {
        self.winner().map(|slot| slot.label()).unwrap_or("Draw")
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(slot) => write!(f, "{} Wins!", slot),
            None => write!(f, "It's a draw!"),
        }
    }
}
