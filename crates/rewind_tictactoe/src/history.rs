//! Board snapshots that make up the game history.

use crate::rules::win::WinLine;
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// One immutable snapshot in the game history.
///
/// Entry 0 is always the empty board with no move. Every later entry
/// records the board after one move, the cell that move was played on,
/// and the winning line if that move completed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    cell: Option<usize>,
    win: Option<WinLine>,
}

impl HistoryEntry {
    /// Creates the initial entry: empty board, no move played.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            cell: None,
            win: None,
        }
    }

    pub(crate) fn played(board: Board, cell: usize, win: Option<WinLine>) -> Self {
        Self {
            board,
            cell: Some(cell),
            win,
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell the last move was played on, if any.
    pub fn cell(&self) -> Option<usize> {
        self.cell
    }

    /// Returns the winning line completed by this entry's move, if any.
    pub fn win(&self) -> Option<&WinLine> {
        self.win.as_ref()
    }

    /// Returns the 1-based `(column, row)` of the entry's move, for
    /// history-list labels. `None` for the initial entry.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.cell.map(|cell| (cell % 3 + 1, cell / 3 + 1))
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::initial()
    }
}
