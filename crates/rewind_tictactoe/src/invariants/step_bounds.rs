//! Step bounds invariant: the viewed step always exists.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step` indexes an existing history entry.
///
/// Holds across branching because a move truncates to the viewed step
/// before appending, never below it.
pub struct StepBoundsInvariant;

impl Invariant for StepBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "current_step is within the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_branch_shrinks_history() {
        let mut game = GameState::new();
        for cell in [0, 4, 1, 5, 2] {
            game.apply_move(cell);
        }
        game.jump_to_step(2);
        game.apply_move(8);
        assert!(StepBoundsInvariant::holds(&game));
        assert_eq!(game.current_step(), 3);
    }
}
