use std::fmt;

/// A player's symbol. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that is due to play when `step` moves have been made.
    pub fn to_play_at(step: usize) -> Mark {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// The mark that produced history entry `step` (`step > 0`).
    pub fn mover_of(step: usize) -> Mark {
        if step % 2 == 1 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One of the nine squares, addressed 0..=8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    pub const COUNT: usize = 9;

    pub const ALL: [Cell; 9] = [
        Cell(0),
        Cell(1),
        Cell(2),
        Cell(3),
        Cell(4),
        Cell(5),
        Cell(6),
        Cell(7),
        Cell(8),
    ];

    pub fn new(index: usize) -> Option<Cell> {
        if index < Self::COUNT {
            Some(Cell(index as u8))
        } else {
            None
        }
    }

    pub fn from_row_col(row: usize, col: usize) -> Option<Cell> {
        if row < 3 && col < 3 {
            Cell::new(row * 3 + col)
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / 3
    }

    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Moves by (`d_row`, `d_col`), clamping at the board edges.
    pub fn offset(self, d_row: isize, d_col: isize) -> Cell {
        let row = (self.row() as isize + d_row).clamp(0, 2) as usize;
        let col = (self.col() as isize + d_col).clamp(0, 2) as usize;
        Cell::from_row_col(row, col).unwrap_or(self)
    }
}

/// Snapshot of the nine squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board([Option<Mark>; 9]);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.0[cell.index()]
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Returns a copy of this board with `mark` placed on `cell`.
    pub fn with_mark(&self, cell: Cell, mark: Mark) -> Board {
        let mut squares = self.0;
        squares[cell.index()] = Some(mark);
        Board(squares)
    }

    pub fn occupied_count(&self) -> usize {
        self.0.iter().filter(|sq| sq.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == Cell::COUNT
    }
}

impl From<[Option<Mark>; 9]> for Board {
    fn from(squares: [Option<Mark>; 9]) -> Self {
        Board(squares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_coordinates() {
        let cell = Cell::new(5).unwrap();
        assert_eq!(cell.row(), 1);
        assert_eq!(cell.col(), 2);
        assert_eq!(Cell::from_row_col(2, 0), Cell::new(6));
        assert_eq!(Cell::new(9), None);
        assert_eq!(Cell::from_row_col(3, 0), None);
    }

    #[test]
    fn test_cell_offset_clamps() {
        let corner = Cell::new(0).unwrap();
        assert_eq!(corner.offset(-1, -1), corner);
        assert_eq!(corner.offset(1, 1), Cell::new(4).unwrap());
        assert_eq!(Cell::new(8).unwrap().offset(5, 5), Cell::new(8).unwrap());
    }

    #[test]
    fn test_with_mark_leaves_snapshot_untouched() {
        let empty = Board::new();
        let cell = Cell::new(4).unwrap();
        let next = empty.with_mark(cell, Mark::X);
        assert_eq!(empty.get(cell), None);
        assert_eq!(next.get(cell), Some(Mark::X));
        assert_eq!(next.occupied_count(), 1);
        assert!(!next.is_full());
    }

    #[test]
    fn test_mark_parity() {
        assert_eq!(Mark::to_play_at(0), Mark::X);
        assert_eq!(Mark::to_play_at(3), Mark::O);
        assert_eq!(Mark::mover_of(1), Mark::X);
        assert_eq!(Mark::mover_of(2), Mark::O);
    }
}
