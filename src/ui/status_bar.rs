use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.game.status()),
        Style::default().fg(Theme::ACCENT_GREEN).bg(Theme::BG_ELEVATED),
    ));
    parts.push(Span::styled(
        format!("| {} ", state.status_line()),
        Theme::status_bar(),
    ));
    parts.push(Span::styled(
        "| ? help  q quit ",
        Style::default().fg(Theme::TEXT_SECONDARY).bg(Theme::BG_ELEVATED),
    ));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Board => "BOARD",
        FocusPanel::History => "MOVES",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 4);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
