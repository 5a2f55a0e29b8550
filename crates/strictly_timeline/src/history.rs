//! Navigable game history.
//!
//! [`GameHistory`] records one board snapshot per move plus a cursor that
//! marks the snapshot being viewed. Whose turn it is, whether the game is
//! over, and who won are all derived from the viewed snapshot; nothing
//! besides the entries and the cursor is stored.

use super::action::{Move, MoveOutcome, Rejection};
use super::contracts::{Contract, MoveContract};
use super::error::InvalidArgument;
use super::listing::{CellCoord, MoveListing, SortOrder};
use super::rules::{WinDetector, is_full};
use super::view::ViewSnapshot;
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Board size used by [`GameHistory::default`].
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest board size [`GameHistory::new`] accepts.
///
/// Every entry holds a full board copy, so the cell count stays small.
pub const MAX_BOARD_SIZE: usize = 64;

/// One recorded point in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Cell claimed to reach this board; `None` for the opening entry.
    played_cell: Option<usize>,
}

impl HistoryEntry {
    /// The empty opening entry.
    fn origin(size: usize) -> Self {
        Self {
            board: Board::empty(size),
            played_cell: None,
        }
    }

    /// Entry reached by claiming `cell`.
    pub(crate) fn recorded(board: Board, cell: usize) -> Self {
        Self {
            board,
            played_cell: Some(cell),
        }
    }
}

/// Sequence of board snapshots with a movable viewing cursor.
///
/// Entry 0 is always the empty board. A move made while the cursor sits on
/// an earlier entry discards every later entry before recording itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) size: usize,
    pub(crate) entries: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `size` is zero or above
    /// [`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, InvalidArgument> {
        if size == 0 {
            return Err(InvalidArgument::new("Board size must be at least 1"));
        }
        if size > MAX_BOARD_SIZE {
            return Err(InvalidArgument::new(format!(
                "Board size {size} exceeds the maximum of {MAX_BOARD_SIZE}"
            )));
        }
        Ok(Self::start(size))
    }

    fn start(size: usize) -> Self {
        Self {
            size,
            entries: vec![HistoryEntry::origin(size)],
            current_step: 0,
        }
    }

    /// Plays `cells` in order from an empty board, skipping ignored moves.
    #[instrument(skip(cells))]
    pub fn replay(
        size: usize,
        cells: impl IntoIterator<Item = usize>,
    ) -> Result<Self, InvalidArgument> {
        let mut history = Self::new(size)?;
        for cell in cells {
            history.apply_move(cell);
        }
        Ok(history)
    }

    /// Number of rows (and columns) of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the viewed entry.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The viewed entry.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.current_step]
    }

    /// Player to move at the viewed step.
    pub fn next_player(&self) -> Player {
        Player::to_move_after(self.current_step)
    }

    /// Whether the viewed board has a winner or no vacant cell.
    pub fn is_over(&self) -> bool {
        let board = &self.current_entry().board;
        WinDetector::evaluate(board).is_some() || is_full(board)
    }

    /// Places the next player's mark on `cell`.
    ///
    /// Moves on a decided position, off the board, or onto an occupied cell
    /// are ignored and leave the history untouched; the returned outcome
    /// says which rule applied. Otherwise any entries after the cursor are
    /// discarded, the new board is appended, and the cursor moves onto it.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        if let Err(reason) = MoveContract::pre(self, &cell) {
            debug!(%reason, "Move ignored");
            return MoveOutcome::Rejected(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let Some(board) = self.current_entry().board.with_mark(cell, player.into()) else {
            return MoveOutcome::Rejected(Rejection::OutOfBounds(cell));
        };

        let discarded = self.entries.len() - (self.current_step + 1);
        self.entries.truncate(self.current_step + 1);
        self.entries.push(HistoryEntry::recorded(board, cell));
        self.current_step = self.entries.len() - 1;

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "Postcondition failed: {:?}", post);
        }

        let action = Move::new(player, cell);
        info!(%action, step = self.current_step, discarded, "Move recorded");
        MoveOutcome::Applied(action)
    }

    /// Moves the cursor to `step` without touching recorded entries.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `step` is not a recorded entry.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), InvalidArgument> {
        if step >= self.entries.len() {
            return Err(InvalidArgument::new(format!(
                "Step {step} is outside history of {} entries",
                self.entries.len()
            )));
        }
        debug!(from = self.current_step, to = step, "Jumping");
        self.current_step = step;
        Ok(())
    }

    /// Snapshot of the viewed step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn current_view(&self) -> ViewSnapshot {
        let board = self.current_entry().board.clone();
        let winner = WinDetector::evaluate(&board);
        let draw = winner.is_none() && is_full(&board);
        ViewSnapshot::new(
            board,
            winner,
            draw,
            self.next_player(),
            self.current_step,
            self.entries.len() - 1,
        )
    }

    /// Row and column of the cell played to reach `step`.
    ///
    /// `None` for the opening entry and for steps that were never recorded.
    pub fn move_description(&self, step: usize) -> Option<CellCoord> {
        let cell = self.entries.get(step)?.played_cell?;
        Some(CellCoord::from_index(cell, self.size))
    }

    /// The move that produced entry `step`, if any.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let cell = self.entries.get(step)?.played_cell?;
        Some(Move::new(Player::to_move_after(step - 1), cell))
    }

    /// One listing row per entry, in the requested order.
    pub fn moves(&self, order: SortOrder) -> Vec<MoveListing> {
        let mut listings: Vec<MoveListing> = (0..self.entries.len())
            .map(|step| {
                MoveListing::new(
                    step,
                    self.move_description(step),
                    step == self.current_step,
                )
            })
            .collect();
        if order == SortOrder::Descending {
            listings.reverse();
        }
        listings
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::start(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_new_history_has_empty_origin() {
        let history = GameHistory::default();
        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.current_step(), 0);
        assert_eq!(*history.entries()[0].played_cell(), None);
        assert_eq!(history.entries()[0].board(), &Board::empty(3));
        assert_eq!(history.next_player(), Player::X);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(GameHistory::new(0).is_err());
    }

    #[test]
    fn test_apply_move_appends_and_alternates() {
        let mut history = GameHistory::default();
        let outcome = history.apply_move(4);
        assert_eq!(outcome, MoveOutcome::Applied(Move::new(Player::X, 4)));
        assert_eq!(history.next_player(), Player::O);

        history.apply_move(0);
        assert_eq!(history.entries().len(), 3);
        assert_eq!(
            history.current_entry().board().get(0),
            Some(Mark::Occupied(Player::O))
        );
        assert_eq!(history.move_at(2), Some(Move::new(Player::O, 0)));
    }

    #[test]
    fn test_rejections_in_precondition_order() {
        let mut history = GameHistory::new(1).unwrap();
        assert_eq!(
            history.apply_move(1).rejection(),
            Some(Rejection::OutOfBounds(1))
        );
        history.apply_move(0);
        // Decided boards reject everything, even off-board cells.
        assert_eq!(history.apply_move(5).rejection(), Some(Rejection::GameOver));
    }

    #[test]
    fn test_out_of_bounds_cell_is_ignored() {
        let mut history = GameHistory::default();
        let before = history.clone();
        assert!(!history.apply_move(9).is_applied());
        assert_eq!(history, before);
    }

    #[test]
    fn test_move_at_origin_is_none() {
        let history = GameHistory::replay(3, [4]).unwrap();
        assert_eq!(history.move_at(0), None);
        assert_eq!(history.move_at(7), None);
        assert_eq!(history.move_description(1), Some(CellCoord::new(1, 1)));
    }
}
