//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 possible winning lines, in scan order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals. The order is part of
/// the contract: on a board with several completed lines, the first
/// match in this table is the one reported.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed winning line: the player and the ordered cell triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    player: Player,
    cells: [usize; 3],
}

impl WinLine {
    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the winning cell triple, in scan order.
    pub fn cells(&self) -> &[usize; 3] {
        &self.cells
    }

    /// Checks whether the given cell is part of the line.
    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }
}

/// Evaluates the board for a winner.
///
/// Returns the first line in scan order whose three squares hold the
/// same mark, or `None` if no line is complete. Pure and O(1): eight
/// fixed lines, three comparisons each.
#[instrument]
pub fn evaluate(board: &Board) -> Option<WinLine> {
    for cells in LINES {
        let [a, b, c] = cells;
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            if let Some(Square::Occupied(player)) = sq {
                return Some(WinLine { player, cells });
            }
        }
    }

    None
}
