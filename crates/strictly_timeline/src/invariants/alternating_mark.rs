//! Alternating mark invariant: players alternate X, O, X, O, ...

use super::super::{GameHistory, Mark, Player};
use super::Invariant;

/// Invariant: The mark placed at step `s` belongs to X for odd `s`
/// and to O for even `s`.
pub struct AlternatingMarkInvariant;

impl Invariant<GameHistory> for AlternatingMarkInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| match *entry.played_cell() {
                Some(cell) => {
                    entry.board().get(cell) == Some(Mark::Occupied(Player::to_move_after(step - 1)))
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistoryEntry;

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingMarkInvariant::holds(&GameHistory::default()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let history = GameHistory::replay(3, [0, 4, 2, 1, 7]).unwrap();
        assert!(AlternatingMarkInvariant::holds(&history));
        assert_eq!(history.next_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut history = GameHistory::replay(3, [0]).unwrap();
        let board = history.entries()[1]
            .board()
            .with_mark(4, Mark::Occupied(Player::X))
            .unwrap();
        history.entries.push(HistoryEntry::recorded(board, 4));
        assert!(!AlternatingMarkInvariant::holds(&history));
    }
}
