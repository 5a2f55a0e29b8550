//! Tests for move recording, rejection, and time travel.

use strictly_timeline::{
    Board, GameHistory, InvariantSet, LineKind, MAX_BOARD_SIZE, Mark, MoveOutcome, Player,
    Rejection, Status, TimelineInvariants,
};

fn played(cells: &[usize]) -> GameHistory {
    GameHistory::replay(3, cells.iter().copied()).expect("Valid board size")
}

#[test]
fn test_top_row_win_stops_play() {
    let mut history = played(&[0, 4, 1, 5, 2]);

    let view = history.current_view();
    let result = view.winner().as_ref().expect("X should have won");
    assert_eq!(*result.winner(), Player::X);
    assert_eq!(result.cells(), &[0, 1, 2]);
    assert_eq!(result.kind(), LineKind::Row(0));
    assert!(history.is_over());

    let before = history.clone();
    assert_eq!(
        history.apply_move(3),
        MoveOutcome::Rejected(Rejection::GameOver)
    );
    assert_eq!(history, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let history = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(history.entries().len(), 10);

    let view = history.current_view();
    assert!(*view.is_draw());
    assert!(view.winner().is_none());
    assert_eq!(view.status(), Status::Draw);
    assert!(history.is_over());
}

#[test]
fn test_drawn_board_ignores_every_cell() {
    let mut history = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = history.clone();

    for cell in 0..9 {
        assert_eq!(
            history.apply_move(cell),
            MoveOutcome::Rejected(Rejection::GameOver)
        );
        assert_eq!(history, before);
    }
}

#[test]
fn test_jump_to_start_then_branch() {
    let mut history = played(&[0, 4, 1, 5, 3]);
    assert_eq!(history.entries().len(), 6);

    history.jump_to(0).expect("Step 0 always exists");
    let view = history.current_view();
    assert_eq!(view.board(), &Board::empty(3));
    assert_eq!(*view.step_number(), 0);
    assert_eq!(*view.total_moves(), 5);
    assert_eq!(*view.next_player(), Player::X);

    history.apply_move(8);
    assert_eq!(history.entries().len(), 2);
    assert_eq!(*history.entries()[1].played_cell(), Some(8));
    assert_eq!(history.current_step(), 1);
    assert_eq!(
        history.current_entry().board().get(0),
        Some(Mark::Empty),
        "The original first move is discarded"
    );
}

#[test]
fn test_branch_from_middle_truncates_future() {
    let mut history = played(&[0, 4, 1, 5]);
    history.jump_to(2).unwrap();
    assert_eq!(history.entries().len(), 5);

    let outcome = history.apply_move(8);
    assert!(outcome.is_applied());
    assert_eq!(history.entries().len(), 4);
    assert_eq!(history.current_step(), 3);
    // Step 3 was played by X again, as it was X's turn at step 2.
    assert_eq!(
        history.current_entry().board().get(8),
        Some(Mark::Occupied(Player::X))
    );
    assert!(TimelineInvariants::check_all(&history).is_ok());
}

#[test]
fn test_occupied_cell_is_ignored() {
    let mut history = played(&[4]);
    let before = history.clone();

    for _ in 0..3 {
        assert_eq!(
            history.apply_move(4),
            MoveOutcome::Rejected(Rejection::CellOccupied(4))
        );
        assert_eq!(history, before);
    }
}

#[test]
fn test_occupied_cell_ignored_after_jump_keeps_future() {
    let mut history = played(&[4, 0, 8]);
    history.jump_to(1).unwrap();
    let before = history.clone();

    history.apply_move(4);
    assert_eq!(history, before);
    assert_eq!(history.entries().len(), 4);
}

#[test]
fn test_turns_alternate_until_decided() {
    let mut history = GameHistory::default();
    let mut expected = Player::X;

    for cell in [4, 0, 8, 2, 1, 7, 3] {
        assert!(!history.is_over());
        assert_eq!(history.next_player(), expected);
        match history.apply_move(cell) {
            MoveOutcome::Applied(action) => assert_eq!(action.player, expected),
            MoveOutcome::Rejected(reason) => panic!("Unexpected rejection: {reason}"),
        }
        expected = expected.opponent();
    }
}

#[test]
fn test_jump_out_of_range_fails_without_change() {
    let mut history = played(&[0, 4]);
    history.jump_to(1).unwrap();
    let before = history.clone();

    let err = history.jump_to(3).expect_err("Step 3 was never recorded");
    assert!(err.message.contains("Step 3"));
    assert_eq!(history, before);

    assert!(history.jump_to(usize::MAX).is_err());
    assert_eq!(history, before);
}

#[test]
fn test_jump_keeps_entries_and_rederives_turn() {
    let mut history = played(&[0, 4, 1]);
    let entries = history.entries().to_vec();

    for step in [3, 0, 2, 1] {
        history.jump_to(step).unwrap();
        assert_eq!(history.current_step(), step);
        assert_eq!(history.entries(), entries.as_slice());
        let expected = if step % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(history.next_player(), expected);
    }
}

#[test]
fn test_view_reflects_viewed_step_not_latest() {
    let mut history = played(&[0, 4, 1, 5, 2]);
    history.jump_to(3).unwrap();

    assert!(!history.is_over());
    let view = history.current_view();
    assert!(view.winner().is_none());
    assert_eq!(view.status(), Status::NextPlayer(Player::O));

    // Play continues from the viewed step even though a win was recorded later.
    assert!(history.apply_move(8).is_applied());
    assert_eq!(history.entries().len(), 5);
}

#[test]
fn test_single_cell_board_is_won_immediately() {
    let mut history = GameHistory::new(1).unwrap();
    history.apply_move(0);

    let view = history.current_view();
    assert_eq!(view.status(), Status::Won(Player::X));
    assert_eq!(view.winner().as_ref().unwrap().cells(), &[0]);
    assert!(!*view.is_draw());
}

#[test]
fn test_larger_board() {
    let history = GameHistory::replay(4, [0, 4, 5, 8, 10, 12, 15]).unwrap();
    let view = history.current_view();
    assert_eq!(view.status(), Status::Won(Player::X));
    assert_eq!(view.winner().as_ref().unwrap().kind(), LineKind::Diagonal);
}

#[test]
fn test_zero_size_is_invalid() {
    let err = GameHistory::new(0).unwrap_err();
    assert!(err.to_string().starts_with("Invalid argument:"));
}

#[test]
fn test_oversized_board_is_invalid() {
    assert!(GameHistory::new(MAX_BOARD_SIZE).is_ok());
    assert!(GameHistory::new(MAX_BOARD_SIZE + 1).is_err());

    let err = GameHistory::new(usize::MAX).unwrap_err();
    assert!(err.to_string().contains("exceeds the maximum"));
    assert!(GameHistory::replay(usize::MAX, [0]).is_err());
}
