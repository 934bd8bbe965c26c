//! Invariant checks over mixed operation sequences.

use rewind_tictactoe::GameState;
use rewind_tictactoe::invariants::{
    GameInvariants, HistoryChainInvariant, Invariant, InvariantSet, TurnParityInvariant,
};

/// Drives a game through moves and jumps, checking the full invariant
/// set after every operation.
fn check_sequence(ops: &[Op]) {
    let mut game = GameState::new();
    for op in ops {
        match *op {
            Op::Move(cell) => game.apply_move(cell),
            Op::Jump(step) => game.jump_to_step(step),
            Op::ToggleSort => game.toggle_sort_order(),
        }
        if let Err(violations) = GameInvariants::check_all(&game) {
            panic!("invariants violated after {op:?}: {violations:?}");
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Move(usize),
    Jump(usize),
    ToggleSort,
}

#[test]
fn test_invariants_hold_through_plain_play() {
    use Op::*;
    check_sequence(&[Move(4), Move(0), Move(8), Move(2), Move(6)]);
}

#[test]
fn test_invariants_hold_through_a_win_and_rejections() {
    use Op::*;
    check_sequence(&[
        Move(0),
        Move(4),
        Move(1),
        Move(5),
        Move(2),  // X wins
        Move(8),  // rejected: game over
        Move(0),  // rejected: occupied (and game over)
        Move(42), // rejected: off the board
    ]);
}

#[test]
fn test_invariants_hold_through_jumps_and_branches() {
    use Op::*;
    check_sequence(&[
        Move(0),
        Move(4),
        Move(1),
        Move(5),
        Jump(2),
        ToggleSort,
        Move(8), // branches, discarding two entries
        Jump(0),
        Move(6), // branches again from the start
        ToggleSort,
    ]);
}

#[test]
fn test_turn_parity_after_every_jump_target() {
    let mut game = GameState::new();
    for cell in [0, 4, 1, 5] {
        game.apply_move(cell);
    }
    for step in 0..game.history().len() {
        game.jump_to_step(step);
        assert!(TurnParityInvariant::holds(&game), "parity broken at step {step}");
        assert_eq!(game.x_is_next(), step % 2 == 0);
    }
}

#[test]
fn test_history_chain_rebuilt_after_branch() {
    let mut game = GameState::new();
    for cell in [0, 4, 1, 5, 2] {
        game.apply_move(cell);
    }
    game.jump_to_step(1);
    game.apply_move(8);
    assert!(HistoryChainInvariant::holds(&game));
    assert_eq!(game.history().len(), 3);
}
