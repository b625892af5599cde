use crate::app::state::*;
use crate::game::{Cell, Mark};
use crate::ui::layout::{self, CELL_HEIGHT, CELL_WIDTH, GRID_HEIGHT, GRID_WIDTH};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// The 3x3 grid, centered inside the board panel's borders.
pub fn grid_area(panel: Rect) -> Rect {
    let inner = layout::inner(panel);
    let x = inner.x + inner.width.saturating_sub(GRID_WIDTH) / 2;
    let y = inner.y + inner.height.saturating_sub(GRID_HEIGHT) / 2;
    Rect::new(
        x,
        y,
        GRID_WIDTH.min(inner.width),
        GRID_HEIGHT.min(inner.height),
    )
}

pub fn cell_rect(grid: Rect, cell: Cell) -> Rect {
    let x = grid.x + cell.col() as u16 * (CELL_WIDTH + 1);
    let y = grid.y + cell.row() as u16 * (CELL_HEIGHT + 1);
    Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid)
}

/// Square under a terminal position inside the board panel, if any.
/// Separators between squares hit nothing.
pub fn cell_at(panel: Rect, x: u16, y: u16) -> Option<Cell> {
    let grid = grid_area(panel);
    Cell::ALL
        .into_iter()
        .find(|&cell| layout::contains(cell_rect(grid, cell), x, y))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Board;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(" Board ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);
    frame.render_widget(block, area);

    let grid = grid_area(area);
    // Separators show through the gaps between squares.
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BORDER_DIM)),
        grid,
    );

    let board = state.game.board();
    let winning = state
        .game
        .winner()
        .filter(|_| state.config.ui.highlight_winning_line);
    let bright = state.tick_count % 2 == 0;

    for cell in Cell::ALL {
        let rect = cell_rect(grid, cell);
        if rect.is_empty() {
            continue;
        }

        let cell_style = if winning.is_some_and(|w| w.contains(cell)) {
            Theme::cell_winning(bright)
        } else if focused && cell == state.cursor {
            Theme::cell_cursor()
        } else {
            Theme::cell()
        };

        let glyph = match board.get(cell) {
            Some(Mark::X) => Span::styled("X", Theme::mark_x()),
            Some(Mark::O) => Span::styled("O", Theme::mark_o()),
            None => Span::styled(
                (cell.index() + 1).to_string(),
                Style::default().fg(Theme::TEXT_MUTED),
            ),
        };

        let mut lines = vec![Line::from(""); CELL_HEIGHT as usize];
        lines[CELL_HEIGHT as usize / 2] = Line::from(glyph);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(cell_style);
        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Rect {
        Rect::new(0, 3, GRID_WIDTH + 2, GRID_HEIGHT + 2)
    }

    #[test]
    fn test_cell_at_maps_squares() {
        // Inner grid starts at (1, 4).
        assert_eq!(cell_at(panel(), 1, 4), Cell::new(0));
        assert_eq!(cell_at(panel(), 1 + CELL_WIDTH + 1, 4), Cell::new(1));
        assert_eq!(
            cell_at(panel(), 1 + 2 * (CELL_WIDTH + 1) + 3, 4 + 2 * (CELL_HEIGHT + 1) + 1),
            Cell::new(8)
        );
    }

    #[test]
    fn test_cell_at_misses_separators_and_borders() {
        assert_eq!(cell_at(panel(), 1 + CELL_WIDTH, 4), None);
        assert_eq!(cell_at(panel(), 1, 4 + CELL_HEIGHT), None);
        assert_eq!(cell_at(panel(), 0, 3), None);
        assert_eq!(cell_at(panel(), 40, 4), None);
    }

    #[test]
    fn test_every_cell_round_trips_through_its_rect() {
        let grid = grid_area(panel());
        for cell in Cell::ALL {
            let rect = cell_rect(grid, cell);
            assert_eq!(rect.width, CELL_WIDTH);
            assert_eq!(rect.height, CELL_HEIGHT);
            assert_eq!(cell_at(panel(), rect.x, rect.y), Some(cell));
        }
    }
}
