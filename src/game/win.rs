//! Win detection.

use super::board::{Board, Cell, Mark};

/// The eight lines that win: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinInfo {
    pub winner: Mark,
    pub line: [Cell; 3],
}

impl WinInfo {
    pub fn contains(&self, cell: Cell) -> bool {
        self.line.contains(&cell)
    }
}

/// Returns the winner and winning line of the first completed line in
/// [`LINES`] order, or `None`.
pub fn calculate_winner(board: &Board) -> Option<WinInfo> {
    LINES.iter().find_map(|&[a, b, c]| {
        let line = [Cell::ALL[a], Cell::ALL[b], Cell::ALL[c]];
        let mark = board.get(line[0])?;
        if board.get(line[1]) == Some(mark) && board.get(line[2]) == Some(mark) {
            Some(WinInfo { winner: mark, line })
        } else {
            None
        }
    })
}
