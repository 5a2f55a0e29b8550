//! Empty origin invariant: history starts from a blank board.

use super::super::{GameHistory, Mark};
use super::Invariant;

/// Invariant: Entry 0 is the empty board with no played cell.
pub struct EmptyOriginInvariant;

impl Invariant<GameHistory> for EmptyOriginInvariant {
    fn holds(history: &GameHistory) -> bool {
        let Some(origin) = history.entries().first() else {
            return false;
        };

        origin.played_cell().is_none()
            && origin.board().size() == history.size()
            && origin.board().marks().iter().all(|m| *m == Mark::Empty)
    }

    fn description() -> &'static str {
        "First entry is the empty board"
    }
}
