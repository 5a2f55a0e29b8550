//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::win::WinDetector;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.marks().iter().all(|m| *m != Mark::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && WinDetector::evaluate(board).is_none()
}
