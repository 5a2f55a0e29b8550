//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::Rejection;
use super::history::GameHistory;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The viewed position must still be undecided.
pub struct PositionUndecided;

impl PositionUndecided {
    /// Rejects with [`Rejection::GameOver`] on a won or full board.
    pub fn check(history: &GameHistory) -> Result<(), Rejection> {
        if history.is_over() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell must be on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Rejects with [`Rejection::OutOfBounds`] past the last cell.
    pub fn check(cell: usize, history: &GameHistory) -> Result<(), Rejection> {
        if cell >= history.current_entry().board().cell_count() {
            Err(Rejection::OutOfBounds(cell))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell must be vacant on the viewed board.
pub struct CellIsVacant;

impl CellIsVacant {
    /// Rejects with [`Rejection::CellOccupied`] when a mark is present.
    pub fn check(cell: usize, history: &GameHistory) -> Result<(), Rejection> {
        if history.current_entry().board().is_vacant(cell) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(cell))
        }
    }
}

/// Composite precondition, checked in order: undecided, on board, vacant.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(history))]
    pub fn check(cell: usize, history: &GameHistory) -> Result<(), Rejection> {
        PositionUndecided::check(history)?;
        CellOnBoard::check(cell, history)?;
        CellIsVacant::check(cell, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Viewed position is undecided
/// - Cell is on the board
/// - Cell is vacant
///
/// Postconditions:
/// - All history invariants hold
/// - Entries up to the old cursor are kept, later ones dropped,
///   and exactly one entry follows them with the cursor on it
pub struct MoveContract;

impl Contract<GameHistory, usize> for MoveContract {
    fn pre(history: &GameHistory, cell: &usize) -> Result<(), Rejection> {
        LegalMove::check(*cell, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match TimelineInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let kept = before.current_step() + 1;
        let extended = after.entries().len() == kept + 1
            && after.current_step() == kept
            && after.entries()[..kept] == before.entries()[..kept];
        if !extended {
            violations.push(InvariantViolation::new(
                "History extends the viewed entry by exactly one move",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for violation in &violations {
                warn!(description = %violation.description, "Postcondition violated");
            }
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Mark, Player};

    #[test]
    fn test_precondition_empty_cell() {
        let history = GameHistory::default();
        assert!(MoveContract::pre(&history, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let history = GameHistory::replay(3, [4]).unwrap();
        assert_eq!(
            MoveContract::pre(&history, &4),
            Err(Rejection::CellOccupied(4))
        );
    }

    #[test]
    fn test_precondition_off_board() {
        let history = GameHistory::default();
        assert_eq!(
            MoveContract::pre(&history, &12),
            Err(Rejection::OutOfBounds(12))
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        let history = GameHistory::replay(3, [0, 4, 1, 5, 2]).unwrap();
        assert_eq!(MoveContract::pre(&history, &0), Err(Rejection::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameHistory::replay(3, [0, 4]).unwrap();
        let mut after = before.clone();
        after.apply_move(8);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_branch() {
        let mut before = GameHistory::replay(3, [0, 4, 1]).unwrap();
        before.jump_to(1).unwrap();
        let mut after = before.clone();
        after.apply_move(8);
        assert_eq!(after.entries().len(), 3);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_entry() {
        let before = GameHistory::replay(3, [0]).unwrap();
        assert!(MoveContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameHistory::default();
        let mut after = before.clone();
        let board = before.entries()[0]
            .board()
            .with_mark(3, Mark::Occupied(Player::O))
            .unwrap();
        after.entries.push(HistoryEntry::recorded(board, 3));
        after.current_step = 1;

        // O cannot make the first move.
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
