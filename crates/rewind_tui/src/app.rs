//! Application state and key handling.
//!
//! The app owns the [`GameState`] and maps key presses onto its three
//! entry points; everything else is re-derived from the state when the
//! next frame is drawn.

use derive_getters::Getters;
use ratatui::widgets::ListState;
use rewind_tictactoe::GameState;
use tracing::debug;

use crossterm::event::KeyCode;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    list_state: ListState,
}

impl App {
    /// Creates a new application. `descending` starts the history list
    /// newest-first.
    pub fn new(descending: bool) -> Self {
        let mut game = GameState::new();
        if descending {
            game.toggle_sort_order();
        }
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { game, list_state }
    }

    /// Mutable access to the history-list selection for stateful
    /// rendering.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Maps a history-list row to a step, honoring the sort order.
    pub fn step_for_row(&self, row: usize) -> usize {
        if self.game.sort_ascending() {
            row
        } else {
            self.game.history().len() - 1 - row
        }
    }

    /// Maps a step to its history-list row. The mapping is its own
    /// inverse in either sort order.
    pub fn row_for_step(&self, step: usize) -> usize {
        self.step_for_row(step)
    }

    /// Handles a key press.
    ///
    /// `1`-`9` play a cell, `Up`/`Down` move the history selection,
    /// `Enter` jumps to the selected step, `s` flips the sort order and
    /// `q` quits.
    pub fn handle_key(&mut self, key: KeyCode) -> KeyOutcome {
        match key {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char('s') => {
                let step = self.selected_step();
                self.game.toggle_sort_order();
                // Keep the same step selected in the re-ordered list.
                self.select_step(step);
            }
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                let cell = c as usize - '1' as usize;
                debug!(cell, "cell key pressed");
                self.game.apply_move(cell);
                self.select_step(self.game.current_step());
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => {
                let step = self.selected_step();
                self.game.jump_to_step(step);
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    /// The step currently selected in the history list.
    pub fn selected_step(&self) -> usize {
        let row = self.list_state.selected().unwrap_or(0);
        self.step_for_row(row.min(self.game.history().len() - 1))
    }

    fn select_step(&mut self, step: usize) {
        let row = self.row_for_step(step);
        self.list_state.select(Some(row));
    }

    fn move_selection(&mut self, delta: isize) {
        let rows = self.game.history().len();
        let row = self.list_state.selected().unwrap_or(0);
        let row = row.saturating_add_signed(delta).min(rows - 1);
        self.list_state.select(Some(row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            app.handle_key(key);
        }
    }

    fn digits(s: &str) -> Vec<KeyCode> {
        s.chars().map(KeyCode::Char).collect()
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let mut app = App::new(false);
        // Keys are 1-based; "15" plays cells 0 and 4.
        press(&mut app, &digits("15"));
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.game().status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_winning_sequence_through_keys() {
        let mut app = App::new(false);
        press(&mut app, &digits("25163"));
        assert_eq!(app.game().status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(false);
        assert_eq!(app.handle_key(KeyCode::Char('q')), KeyOutcome::Quit);
    }

    #[test]
    fn test_selection_follows_moves() {
        let mut app = App::new(false);
        press(&mut app, &digits("159"));
        assert_eq!(app.list_state().selected(), Some(3));
        assert_eq!(app.selected_step(), 3);
    }

    #[test]
    fn test_jump_via_selection_then_branch() {
        let mut app = App::new(false);
        press(&mut app, &digits("1593"));
        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.game().current_step(), 2);
        // A fresh move from step 2 overwrites the old future.
        press(&mut app, &digits("7"));
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.game().current().cell(), Some(6));
    }

    #[test]
    fn test_descending_order_reverses_rows() {
        let mut app = App::new(true);
        press(&mut app, &digits("15"));
        // Row 0 shows the newest step when descending.
        assert_eq!(app.step_for_row(0), 2);
        assert_eq!(app.step_for_row(2), 0);
        // The move handler re-selected the current step's row.
        assert_eq!(app.list_state().selected(), Some(0));
        assert_eq!(app.selected_step(), 2);
    }

    #[test]
    fn test_sort_toggle_keeps_selected_step() {
        let mut app = App::new(false);
        press(&mut app, &digits("159"));
        press(&mut app, &[KeyCode::Up]);
        let step = app.selected_step();
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.selected_step(), step);
        assert!(!app.game().sort_ascending());
    }

    #[test]
    fn test_selection_clamps_at_list_edges() {
        let mut app = App::new(false);
        press(&mut app, &[KeyCode::Up, KeyCode::Up]);
        assert_eq!(app.list_state().selected(), Some(0));
        press(&mut app, &digits("1"));
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.list_state().selected(), Some(1));
    }
}
