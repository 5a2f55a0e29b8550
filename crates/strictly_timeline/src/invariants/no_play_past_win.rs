//! No play past win invariant: a decided board is always the last entry.

use super::super::GameHistory;
use super::super::rules::WinDetector;
use super::Invariant;

/// Invariant: Only the last entry may hold a completed line.
pub struct NoPlayPastWinInvariant;

impl Invariant<GameHistory> for NoPlayPastWinInvariant {
    fn holds(history: &GameHistory) -> bool {
        let entries = history.entries();
        let Some((_, earlier)) = entries.split_last() else {
            return true;
        };
        earlier
            .iter()
            .all(|entry| WinDetector::evaluate(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won board"
    }
}
