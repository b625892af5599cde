use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one square in terminal columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one square in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Three squares plus two one-cell separators.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

pub struct AppLayout {
    pub status: Rect,
    pub board: Rect,
    pub move_list: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: board column | gap | move list
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(GRID_WIDTH + 2), // Board plus borders
            Constraint::Min(30),                // Move list
        ])
        .split(content);

    let left_panel = h_chunks[0];
    let move_list = h_chunks[1];

    // Left column: status | board | filler
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Status
            Constraint::Length(GRID_HEIGHT + 2), // Board plus borders
            Constraint::Min(0),
        ])
        .split(left_panel);

    AppLayout {
        status: left_chunks[0],
        board: left_chunks[1],
        move_list,
        status_bar,
    }
}

/// Inside of a bordered panel.
pub fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

pub fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.right() && y >= area.y && y < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_board() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.board.width, GRID_WIDTH + 2);
        assert_eq!(layout.board.height, GRID_HEIGHT + 2);
        assert_eq!(layout.status.y, 0);
        assert_eq!(layout.board.y, 3);
        assert_eq!(layout.status_bar.y, 23);
        assert!(layout.move_list.x > layout.board.right());
        assert_eq!(layout.move_list.height, 23);
    }

    #[test]
    fn test_contains_is_half_open() {
        let area = Rect::new(2, 2, 3, 3);
        assert!(contains(area, 2, 2));
        assert!(contains(area, 4, 4));
        assert!(!contains(area, 5, 4));
        assert!(!contains(area, 1, 2));
    }
}
