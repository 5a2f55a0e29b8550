//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A move that breaks the rules
//! is not an error either: the history ignores it and reports why as a
//! plain value, the way a board ignores a click on a taken cell.

use super::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major index of the claimed cell.
    pub cell: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.player, self.cell)
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The viewed position already has a winner or a full board.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

/// What happened to a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new history entry.
    Applied(Move),
    /// The move was ignored; history and cursor are unchanged.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// Returns the rejection reason, if the move was ignored.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Applied(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}
