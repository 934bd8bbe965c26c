//! Tic-tac-toe game state with a rewindable move history.
//!
//! The crate holds the deterministic core of the game and nothing else:
//! no I/O, no rendering, no async. A UI shell owns a [`GameState`], feeds
//! it cell and history-step indices, and re-derives its view from the
//! accessors after every call.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] — the 3x3 board domain
//! - **Rules**: [`rules::win::evaluate`] — pure win detection over the
//!   8 fixed lines
//! - **History**: [`HistoryEntry`] — immutable board snapshots, one per move
//! - **Game**: [`GameState`] — the single mutation entry points
//!   ([`GameState::apply_move`], [`GameState::jump_to_step`],
//!   [`GameState::toggle_sort_order`])
//! - **Invariants**: first-class properties checked in tests
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Rewind the view two moves and branch from there.
//! game.jump_to_step(3);
//! game.apply_move(8);
//! assert_eq!(game.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
pub mod invariants;
pub mod rules;
mod types;

pub use game::GameState;
pub use history::HistoryEntry;
pub use rules::win::{WinLine, evaluate};
pub use types::{Board, GameStatus, Player, Square};
