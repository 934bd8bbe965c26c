//! The mutable game state and its three entry points.

use crate::history::HistoryEntry;
use crate::rules::win::evaluate;
use crate::types::{GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: the snapshot history plus the viewed step.
///
/// Owned by one UI shell for the lifetime of a session. Moves append
/// to the history; jumping only moves the viewed step, and a move made
/// after jumping backward discards the old future (branch on move).
///
/// Invariant maintained by every operation: `x_is_next` equals
/// `current_step % 2 == 0` (X always moves on even-numbered steps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
    x_is_next: bool,
    sort_ascending: bool,
}

impl GameState {
    /// Creates a new game with the single empty-board entry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
            x_is_next: true,
            sort_ascending: true,
        }
    }

    /// Returns the full snapshot history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the currently viewed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the entry at the currently viewed step.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// Returns whether X moves next from the viewed step.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Returns the player to move from the viewed step.
    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Returns whether the history list is displayed oldest first.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Plays the next player's mark on `cell`, branching from the
    /// viewed step.
    ///
    /// Illegal moves are silently ignored, leaving the state untouched:
    /// a cell outside `0..9`, a cell already occupied in the viewed
    /// board, or any move once the viewed entry holds a winning line.
    /// There is no error surface; the shell simply ignores stray clicks.
    ///
    /// A legal move first truncates the history to the viewed step, so
    /// playing after a jump backward overwrites the old future.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, cell: usize) {
        if cell >= 9 {
            debug!(cell, "move outside the board ignored");
            return;
        }
        let current = self.current();
        if current.win().is_some() {
            debug!(cell, "move after game end ignored");
            return;
        }
        if !current.board().is_empty(cell) {
            debug!(cell, "move on occupied cell ignored");
            return;
        }

        let mover = self.next_player();
        let mut board = current.board().clone();
        board.set(cell, Square::Occupied(mover));
        let win = evaluate(&board);

        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry::played(board, cell, win));
        self.current_step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;
        debug!(cell, %mover, won = win.is_some(), "move applied");
    }

    /// Moves the viewed step without touching the history.
    ///
    /// The turn is recomputed from step parity. Only a later
    /// [`Self::apply_move`] truncates the entries past `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is past the end of the history. The shell only
    /// offers steps that exist, so a bad step is a caller bug, not a
    /// recoverable condition.
    #[instrument(skip(self))]
    pub fn jump_to_step(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "step {step} out of range for history of length {}",
            self.history.len()
        );
        self.current_step = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "jumped to step");
    }

    /// Flips the history-list sort order. Display-only; game logic is
    /// unaffected.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }

    /// Derives the display status from the viewed entry.
    ///
    /// A full board with no winner is still reported as `NextPlayer`;
    /// draws are deliberately not detected (observed reference
    /// behavior).
    pub fn status(&self) -> GameStatus {
        match self.current().win() {
            Some(win) => GameStatus::Won(win.player()),
            None => GameStatus::NextPlayer(self.next_player()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_at_empty_entry() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert!(game.x_is_next());
        assert!(game.sort_ascending());
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_moves_alternate_marks() {
        let mut game = GameState::new();
        game.apply_move(4);
        assert_eq!(game.current().board().get(4), Some(Square::Occupied(Player::X)));
        game.apply_move(0);
        assert_eq!(game.current().board().get(0), Some(Square::Occupied(Player::O)));
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_step(), 2);
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let mut game = GameState::new();
        let before = game.clone();
        game.apply_move(9);
        assert_eq!(game, before);
    }

    #[test]
    fn test_toggle_sort_only_flips_flag() {
        let mut game = GameState::new();
        game.apply_move(0);
        let before = game.clone();
        game.toggle_sort_order();
        assert!(!game.sort_ascending());
        assert_eq!(game.history(), before.history());
        assert_eq!(game.current_step(), before.current_step());
        assert_eq!(game.x_is_next(), before.x_is_next());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_past_history_panics() {
        let mut game = GameState::new();
        game.jump_to_step(1);
    }
}
