use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const BINDINGS: [(&str, &str); 12] = [
    ("1-9", "Play a square"),
    ("←↑↓→ hjkl", "Move the board cursor"),
    ("Enter Space", "Play the cursor square"),
    ("Tab", "Switch between board and moves"),
    ("↑↓ Home End", "Select a move"),
    ("Enter", "Go to the selected move"),
    ("[ ]", "Step back / forward"),
    ("s", "Toggle move order"),
    ("Mouse", "Click a square or a move"),
    ("? F1", "Toggle this help"),
    ("Esc", "Close this help"),
    ("q Ctrl+C", "Quit"),
];

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.show_help {
        return;
    }

    let area = frame.area();

    // Center the popup, sized to the binding table
    let popup_w = 48.min(area.width.saturating_sub(2));
    let popup_h = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keys — Esc to close ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (keys, effect) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", keys), Theme::key_hint()),
            Span::styled(effect, Style::default().fg(Theme::TEXT_SECONDARY)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
