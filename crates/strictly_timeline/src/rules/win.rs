//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Player};
use super::lines::{Line, LineKind, candidate_lines};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A completed line and the player who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WinResult {
    /// Player holding every cell of the line.
    winner: Player,
    /// The winning line.
    line: Line,
}

impl WinResult {
    /// Cell indices of the winning line.
    pub fn cells(&self) -> &[usize] {
        self.line.cells()
    }

    /// Orientation of the winning line.
    pub fn kind(&self) -> LineKind {
        *self.line.kind()
    }
}

/// Evaluates board snapshots for a completed line.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinDetector;

impl WinDetector {
    /// Returns the first line fully owned by one player, if any.
    ///
    /// Lines are tried rows first, then columns, then the main diagonal,
    /// then the anti-diagonal. When several lines are complete the first
    /// one in that order wins.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn evaluate(board: &Board) -> Option<WinResult> {
        let size = board.size();

        for line in candidate_lines(size) {
            let mut x_count = 0;
            let mut o_count = 0;
            for &cell in line.cells() {
                match board.get(cell) {
                    Some(Mark::Occupied(Player::X)) => x_count += 1,
                    Some(Mark::Occupied(Player::O)) => o_count += 1,
                    Some(Mark::Empty) | None => {}
                }
            }

            let winner = if x_count == size {
                Player::X
            } else if o_count == size {
                Player::O
            } else {
                continue;
            };

            trace!(%winner, kind = %line.kind(), "Completed line found");
            return Some(WinResult { winner, line });
        }

        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player owns a complete line,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    WinDetector::evaluate(board).map(|result| result.winner)
}
