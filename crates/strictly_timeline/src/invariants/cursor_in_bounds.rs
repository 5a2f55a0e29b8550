//! Cursor invariant: the viewed step is a recorded entry.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `0 <= current_step < entries.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_step < history.entries.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jumps_keep_cursor_in_bounds() {
        let mut history = GameHistory::replay(3, [0, 4, 8]).unwrap();
        for step in 0..4 {
            history.jump_to(step).unwrap();
            assert!(CursorInBoundsInvariant::holds(&history));
        }
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut history = GameHistory::replay(3, [0]).unwrap();
        history.current_step = 2;
        assert!(!CursorInBoundsInvariant::holds(&history));
    }
}
