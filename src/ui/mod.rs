pub mod board;
mod help;
pub mod layout;
pub mod move_list;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::game::Status;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_status_panel(frame, app_layout.status, state);
    board::render(frame, app_layout.board, state);
    move_list::render(frame, app_layout.move_list, state);
    status_bar::render(frame, app_layout.status_bar, state);
    help::render(frame, state);
}

fn render_status_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let status = state.game.status();
    let style = match status {
        Status::Winner(_) => Theme::status_winner(),
        Status::Tie => Theme::status_tie(),
        Status::NextPlayer(_) => Theme::status_text(),
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(status.to_string(), style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::game::Cell;
    use ratatui::backend::TestBackend;

    fn rendered(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    fn play(state: &mut AppState, cells: &[usize]) {
        for &i in cells {
            state.game.handle_click(Cell::new(i).unwrap());
        }
        state.sync_history_selection();
    }

    #[test]
    fn test_initial_screen() {
        let state = AppState::new(AppConfig::default());
        let screen = rendered(&state);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("(C, R, P)"));
        assert!(screen.contains("Sort descending"));
        assert!(screen.contains("[BOARD]"));
    }

    #[test]
    fn test_moves_and_winner_are_drawn() {
        let mut state = AppState::new(AppConfig::default());
        play(&mut state, &[0, 3, 1, 4, 2]);
        let screen = rendered(&state);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to Move #5"));
        assert!(screen.contains("(2, 0, X)"));
        assert!(screen.contains("Move 5/5"));
    }

    #[test]
    fn test_coordinates_can_be_hidden() {
        let mut config = AppConfig::default();
        config.ui.show_coordinates = false;
        let mut state = AppState::new(config);
        play(&mut state, &[4]);
        let screen = rendered(&state);
        assert!(screen.contains("Go to Move #1"));
        assert!(!screen.contains("(1, 1, X)"));
    }

    #[test]
    fn test_help_overlay() {
        let mut state = AppState::new(AppConfig::default());
        state.show_help = true;
        let screen = rendered(&state);
        assert!(screen.contains("Toggle move order"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = AppState::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
    }
}
