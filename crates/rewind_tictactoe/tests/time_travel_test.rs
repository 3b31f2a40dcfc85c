//! Tests for move application, branching history and time travel.

use rewind_tictactoe::{Board, GameState, Player, Square, Status};

#[test]
fn test_top_row_win_locks_board() {
    let state = GameState::replay(&[0, 4, 1, 5, 2]);

    assert_eq!(
        state.status(),
        Status::Win {
            winner: Player::X,
            line: [0, 1, 2]
        }
    );

    let after = state.apply_move(6);
    assert_eq!(after, state);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let state = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(state.history().len(), 10);
    assert_eq!(state.status(), Status::Draw);
    assert!((0..9).all(|i| state.is_cell_disabled(i)));
}

#[test]
fn test_last_move_can_win_a_full_board() {
    // X completes the 0-4-8 diagonal on the ninth move.
    let state = GameState::replay(&[0, 1, 2, 3, 4, 6, 7, 5, 8]);

    assert_eq!(
        state.status(),
        Status::Win {
            winner: Player::X,
            line: [0, 4, 8]
        }
    );
}

#[test]
fn test_jump_to_start_then_move_branches() {
    let state = GameState::replay(&[0, 1, 2, 3]);
    assert_eq!(state.history().len(), 5);

    let branched = state.jump_to(0).apply_move(4);

    assert_eq!(branched.history().len(), 2);
    assert_eq!(branched.history()[0], Board::new());
    assert_eq!(
        branched.history()[1],
        Board::new().with_mark(4, Player::X).unwrap()
    );
    assert_eq!(branched.current_move(), 1);
}

#[test]
fn test_branch_truncation_law() {
    let state = GameState::replay(&[0, 4, 8, 2, 6]);
    let n = state.history().len();

    for k in 0..n - 1 {
        let rewound = state.jump_to(k);
        let free = (0..9)
            .find(|&i| rewound.current_board().is_empty(i))
            .unwrap();
        let branched = rewound.apply_move(free);

        assert_eq!(branched.history().len(), k + 2, "branch at move {}", k);
        assert_eq!(&branched.history()[..=k], &state.history()[..=k]);
        assert_eq!(branched.current_move(), k + 1);
    }
}

#[test]
fn test_jump_alone_does_not_truncate() {
    let state = GameState::replay(&[0, 4, 8]);
    let rewound = state.jump_to(1);

    assert_eq!(rewound.history(), state.history());
    assert_eq!(rewound.jump_to(3), state);
}

#[test]
fn test_turns_alternate_from_x() {
    let order = [4, 0, 8, 2, 1, 7, 6];
    let mut state = GameState::new();

    for (turn, &index) in order.iter().enumerate() {
        let expected = if turn % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(state.current_player(), expected);

        state = state.apply_move(index);
        assert_eq!(
            state.current_board().get(index),
            Some(Square::Occupied(expected))
        );
    }
}

#[test]
fn test_rewound_view_uses_parity_of_viewed_move() {
    let state = GameState::replay(&[0, 4, 8]);
    assert_eq!(
        state.jump_to(1).status(),
        Status::InProgress { next: Player::O }
    );
    assert_eq!(
        state.jump_to(2).status(),
        Status::InProgress { next: Player::X }
    );
}

#[test]
fn test_illegal_moves_are_noops() {
    let state = GameState::replay(&[4]);

    assert_eq!(state.apply_move(4), state);
    assert_eq!(state.apply_move(9), state);
    assert_eq!(state.apply_move(usize::MAX), state);
    assert_eq!(state.jump_to(2), state);
}

#[test]
fn test_terminal_lock_on_every_square() {
    let won = GameState::replay(&[0, 4, 1, 5, 2]);
    for index in 0..12 {
        assert_eq!(won.apply_move(index), won);
    }

    let drawn = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    for index in 0..9 {
        assert_eq!(drawn.apply_move(index), drawn);
    }
}

#[test]
fn test_rewinding_a_won_game_unlocks_it() {
    let won = GameState::replay(&[0, 4, 1, 5, 2]);
    let rewound = won.jump_to(4);

    assert!(!rewound.status().is_over());
    let replayed = rewound.apply_move(8);
    assert_eq!(
        replayed.status(),
        Status::InProgress { next: Player::O }
    );
    assert_eq!(replayed.history().len(), 6);
}

#[test]
fn test_reset_is_fresh() {
    let state = GameState::replay(&[0, 4, 1]);
    let fresh = GameState::reset();

    assert_ne!(fresh, state);
    assert_eq!(fresh, GameState::new());
    assert_eq!(fresh.history(), &[Board::new()]);
}

#[test]
fn test_derived_status_view() {
    let view = GameState::replay(&[0, 4]).jump_to(1).derived_status();

    assert_eq!(view.status, Status::InProgress { next: Player::O });
    assert_eq!(view.disabled, [false; 9]);
    let labels: Vec<String> = view.history.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["Go to game start", "Current Move #1", "Go to move #2"]);
}
