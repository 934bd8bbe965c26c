//! Win terminality invariant: a winning entry ends its history.

use super::Invariant;
use crate::GameState;

/// Invariant: only the last history entry may hold a winning line.
///
/// Moves after a win are rejected, so nothing is appended past a
/// winning entry; branching from an earlier step removes the winning
/// entry entirely. Either way no entry ever follows a win.
pub struct WinTerminalInvariant;

impl Invariant for WinTerminalInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .rev()
            .skip(1)
            .all(|entry| entry.win().is_none())
    }

    fn description() -> &'static str {
        "no history entry follows an entry with a winning line"
    }
}
