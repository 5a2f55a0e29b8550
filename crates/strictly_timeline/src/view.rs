//! Read-only view of the position under the history cursor.

use super::rules::WinResult;
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the viewed position.
///
/// Winner, draw, and next player describe the viewed step, which is not
/// necessarily the latest recorded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ViewSnapshot {
    /// Board at the viewed step.
    board: Board,
    /// Completed line on that board, if any.
    winner: Option<WinResult>,
    /// Board is full and nobody completed a line.
    is_draw: bool,
    /// Player whose turn it is at the viewed step.
    next_player: Player,
    /// Index of the viewed step.
    step_number: usize,
    /// Number of moves recorded in the history.
    total_moves: usize,
}

impl ViewSnapshot {
    pub(crate) fn new(
        board: Board,
        winner: Option<WinResult>,
        is_draw: bool,
        next_player: Player,
        step_number: usize,
        total_moves: usize,
    ) -> Self {
        Self {
            board,
            winner,
            is_draw,
            next_player,
            step_number,
            total_moves,
        }
    }

    /// Status line for the viewed step.
    pub fn status(&self) -> Status {
        match (&self.winner, self.is_draw) {
            (Some(result), _) => Status::Won(*result.winner()),
            (None, true) => Status::Draw,
            (None, false) => Status::NextPlayer(self.next_player),
        }
    }

    /// Whether `cell` is part of the winning line.
    pub fn is_highlighted(&self, cell: usize) -> bool {
        self.winner
            .as_ref()
            .is_some_and(|result| result.cells().contains(&cell))
    }

    /// Whether the viewed step accepts no more moves.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

/// Outcome or turn at the viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Board is full with no completed line.
    #[display("It's a draw!")]
    Draw,
    /// Game continues with this player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(*player),
            Status::Draw | Status::NextPlayer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use crate::rules::WinDetector;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "It's a draw!");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_highlight_follows_winning_line() {
        let board = [0, 1, 2]
            .into_iter()
            .fold(Board::empty(3), |b, cell| {
                b.with_mark(cell, Mark::Occupied(Player::O)).unwrap()
            });
        let winner = WinDetector::evaluate(&board);
        let view = ViewSnapshot::new(board, winner, false, Player::X, 3, 3);

        assert_eq!(view.status(), Status::Won(Player::O));
        assert!(view.is_over());
        assert!(view.is_highlighted(1));
        assert!(!view.is_highlighted(4));
    }

    #[test]
    fn test_no_highlight_without_winner() {
        let view = ViewSnapshot::new(Board::empty(3), None, false, Player::X, 0, 0);
        assert_eq!(view.status(), Status::NextPlayer(Player::X));
        assert!(!view.is_over());
        assert!((0..9).all(|cell| !view.is_highlighted(cell)));
    }
}
