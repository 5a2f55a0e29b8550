//! Single cell delta invariant: each move claims exactly one vacant cell.

use super::super::{GameHistory, Mark};
use super::Invariant;

/// Invariant: Consecutive boards differ only at the played cell.
///
/// For every step after the first, the played cell was empty on the
/// previous board, holds a mark now, and no other cell changed.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.entries().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(cell) = *next.played_cell() else {
                return false;
            };
            if prev.board().cell_count() != next.board().cell_count() {
                return false;
            }
            if !prev.board().is_vacant(cell) || next.board().get(cell) == Some(Mark::Empty) {
                return false;
            }

            prev.board()
                .marks()
                .iter()
                .zip(next.board().marks())
                .enumerate()
                .all(|(i, (before, after))| i == cell || before == after)
        })
    }

    fn description() -> &'static str {
        "Each entry changes exactly the played cell, which was empty"
    }
}
