//! History chain invariant: each entry is its predecessor plus one move.

use super::Invariant;
use crate::rules::win::evaluate;
use crate::types::{Player, Square};
use crate::GameState;

/// Invariant: the history forms a single well-formed chain of moves.
///
/// Entry 0 is the empty board with no move. Every later entry differs
/// from its predecessor in exactly one cell, which was empty and now
/// carries the alternating mark for that step (X on the move producing
/// an odd-numbered entry). The recorded cell and win line must match
/// the board delta.
pub struct HistoryChainInvariant;

impl Invariant for HistoryChainInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.cell().is_some()
            || first.board().squares().iter().any(|s| *s != Square::Empty)
        {
            return false;
        }

        for (i, pair) in history.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let changed: Vec<usize> = (0..9)
                .filter(|&pos| prev.board().get(pos) != next.board().get(pos))
                .collect();
            let [cell] = changed[..] else {
                return false;
            };

            // Entry i + 1 is produced by move number i + 1; X plays the odd ones.
            let mover = if i % 2 == 0 { Player::X } else { Player::O };
            if prev.board().get(cell) != Some(Square::Empty)
                || next.board().get(cell) != Some(Square::Occupied(mover))
            {
                return false;
            }
            if next.cell() != Some(cell) {
                return false;
            }
            if next.win() != evaluate(next.board()).as_ref() {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "history entries chain by single alternating moves from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryChainInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_through_a_full_game() {
        let mut game = GameState::new();
        for cell in [0, 4, 1, 5, 2] {
            game.apply_move(cell);
            assert!(HistoryChainInvariant::holds(&game));
        }
    }

    #[test]
    fn test_holds_after_branching() {
        let mut game = GameState::new();
        for cell in [0, 4, 1, 5] {
            game.apply_move(cell);
        }
        game.jump_to_step(1);
        game.apply_move(8);
        assert!(HistoryChainInvariant::holds(&game));
    }
}
