//! Turn parity invariant: X moves on even-numbered steps.

use super::Invariant;
use crate::GameState;

/// Invariant: `x_is_next` always agrees with the parity of the viewed
/// step.
///
/// X moves on even-numbered steps (0, 2, 4, ...), O on odd ones, no
/// matter how the view got there (moves or jumps).
pub struct TurnParityInvariant;

impl Invariant for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        state.x_is_next() == (state.current_step() % 2 == 0)
    }

    fn description() -> &'static str {
        "x_is_next equals (current_step % 2 == 0)"
    }
}
