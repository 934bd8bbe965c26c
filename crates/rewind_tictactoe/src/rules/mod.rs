//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board position. Rules are separated
//! from board storage so they can be exercised without a [`crate::GameState`].

pub mod win;

pub use win::{WinLine, evaluate};
