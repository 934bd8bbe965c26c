//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every
//! operation. They are testable independently and serve as
//! documentation of the guarantees [`crate::GameState`] maintains.

pub mod history_chain;
pub mod step_bounds;
pub mod turn_parity;
pub mod win_terminal;

pub use history_chain::HistoryChainInvariant;
pub use step_bounds::StepBoundsInvariant;
pub use turn_parity::TurnParityInvariant;
pub use win_terminal::WinTerminalInvariant;

use crate::GameState;

/// A logical property that must hold for a game state.
pub trait Invariant {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &GameState) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so related invariants compose into a single
/// verification step.
pub trait InvariantSet {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<$($inv: Invariant),+> InvariantSet for ($($inv,)+) {
            fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All game-state invariants as one composable set.
pub type GameInvariants = (
    TurnParityInvariant,
    HistoryChainInvariant,
    StepBoundsInvariant,
    WinTerminalInvariant,
);
