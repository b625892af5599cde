//! Presentation model for the move list.
//!
//! Builds the rows the move list shows from a [`GameState`] without touching
//! the game itself; reordering is purely a view concern.

use super::board::Mark;
use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label of the control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort descending",
            SortOrder::Descending => "Sort ascending",
        }
    }

    /// Maps a display row to its history step for a history of `len` entries.
    pub fn step_at(self, row: usize, len: usize) -> Option<usize> {
        if row >= len {
            return None;
        }
        Some(match self {
            SortOrder::Ascending => row,
            SortOrder::Descending => len - 1 - row,
        })
    }

    /// Maps a history step to its display row.
    pub fn row_of(self, step: usize, len: usize) -> Option<usize> {
        // The mapping is its own inverse.
        self.step_at(step, len)
    }
}

/// Where a move landed, as shown in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub col: usize,
    pub row: usize,
    pub mark: Mark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub step: usize,
    /// 1-based list number; counts down in descending order.
    pub ordinal: usize,
    pub label: String,
    pub placement: Option<Placement>,
    pub is_current: bool,
}

impl HistoryEntry {
    /// `(col, row, symbol)`, or `(C, R, P)` for the game start.
    pub fn coordinates(&self) -> String {
        match self.placement {
            Some(p) => format!("({}, {}, {})", p.col, p.row, p.mark),
            None => "(C, R, P)".to_string(),
        }
    }
}

pub fn describe(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to Move #{}", step)
    }
}

/// Rows for the move list in display order.
pub fn entries(game: &GameState, order: SortOrder) -> Vec<HistoryEntry> {
    let mut rows: Vec<HistoryEntry> = game
        .history()
        .iter()
        .enumerate()
        .map(|(step, mv)| HistoryEntry {
            step,
            ordinal: step + 1,
            label: describe(step),
            placement: mv.placed.filter(|_| step > 0).map(|cell| Placement {
                col: cell.col(),
                row: cell.row(),
                mark: Mark::mover_of(step),
            }),
            is_current: step == game.step_number(),
        })
        .collect();

    if order == SortOrder::Descending {
        rows.reverse();
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn game_with(cells: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &i in cells {
            game.handle_click(Cell::new(i).unwrap());
        }
        game
    }

    #[test]
    fn test_labels_and_coordinates() {
        let game = game_with(&[5, 0]);
        let rows = entries(&game, SortOrder::Ascending);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].label, "Go to game start");
        assert_eq!(rows[0].coordinates(), "(C, R, P)");
        assert!(rows[0].placement.is_none());

        assert_eq!(rows[1].label, "Go to Move #1");
        assert_eq!(rows[1].coordinates(), "(2, 1, X)");
        assert_eq!(rows[2].label, "Go to Move #2");
        assert_eq!(rows[2].coordinates(), "(0, 0, O)");
    }

    #[test]
    fn test_current_highlight_follows_step() {
        let mut game = game_with(&[0, 1, 2]);
        game.jump_to(1).unwrap();
        let rows = entries(&game, SortOrder::Ascending);
        let current: Vec<usize> = rows.iter().filter(|r| r.is_current).map(|r| r.step).collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_descending_reverses_without_touching_game() {
        let game = game_with(&[0, 1, 2]);
        let before = game.clone();
        let rows = entries(&game, SortOrder::Descending);
        let steps: Vec<usize> = rows.iter().map(|r| r.step).collect();
        assert_eq!(steps, vec![3, 2, 1, 0]);
        let ordinals: Vec<usize> = rows.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![4, 3, 2, 1]);
        assert!(rows[0].is_current);
        assert_eq!(game, before);
    }

    #[test]
    fn test_row_step_mapping() {
        assert_eq!(SortOrder::Ascending.step_at(2, 5), Some(2));
        assert_eq!(SortOrder::Descending.step_at(0, 5), Some(4));
        assert_eq!(SortOrder::Descending.row_of(4, 5), Some(0));
        assert_eq!(SortOrder::Descending.step_at(5, 5), None);
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort descending");
        assert_eq!(SortOrder::Descending.toggle_label(), "Sort ascending");
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    }
}
