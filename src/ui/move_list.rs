use crate::app::state::*;
use crate::game::history;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

pub fn visible_rows(area: Rect) -> usize {
    layout::inner(area).height as usize
}

/// History step of the row under a terminal position, if any.
pub fn step_at(area: Rect, list: &HistoryList, len: usize, x: u16, y: u16) -> Option<usize> {
    let inner = layout::inner(area);
    if !layout::contains(inner, x, y) {
        return None;
    }
    let row = list.scroll_offset + (y - inner.y) as usize;
    list.order.step_at(row, len)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::History;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let list = &state.history;
    let rows = history::entries(&state.game, list.order);

    let block = Block::default()
        .title(format!(" Moves ({}) ", rows.len().saturating_sub(1)))
        .title_style(Theme::title())
        .title_bottom(
            Line::from(vec![
                Span::styled(" s ", Theme::key_hint()),
                Span::styled(
                    format!("{} ", list.order.toggle_label()),
                    Style::default().fg(Theme::TEXT_SECONDARY),
                ),
            ])
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let selected_step = list.selected_step(rows.len());
    let show_coordinates = state.config.ui.show_coordinates;
    let mut lines: Vec<Line> = Vec::new();

    for entry in rows.iter().skip(list.scroll_offset).take(visible) {
        let is_selected = focused && selected_step == Some(entry.step);
        let style = if is_selected {
            Theme::move_selected()
        } else if entry.is_current {
            Theme::move_current()
        } else {
            Theme::move_normal()
        };
        let marker = if entry.is_current { "▸" } else { " " };

        let mut text = format!("{}{:>2}. ", marker, entry.ordinal);
        if show_coordinates {
            text.push_str(&format!("{:<11} ", entry.coordinates()));
        }
        text.push_str(&entry.label);

        lines.push(Line::from(Span::styled(text, style)));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    // Scrollbar
    if rows.len() > visible && visible > 0 {
        let scrollbar_area = Rect::new(
            inner.x + inner.width.saturating_sub(1),
            inner.y,
            1,
            inner.height,
        );
        let mut scrollbar_state =
            ScrollbarState::new(rows.len().saturating_sub(visible)).position(list.scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Theme::scrollbar_thumb())
                .track_style(Theme::scrollbar_track()),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SortOrder;

    #[test]
    fn test_step_at_ascending_and_descending() {
        let area = Rect::new(26, 0, 40, 10);
        let mut list = HistoryList::new(SortOrder::Ascending);
        assert_eq!(step_at(area, &list, 4, 30, 1), Some(0));
        assert_eq!(step_at(area, &list, 4, 30, 3), Some(2));
        assert_eq!(step_at(area, &list, 4, 30, 5), None);

        list.order = SortOrder::Descending;
        assert_eq!(step_at(area, &list, 4, 30, 1), Some(3));
    }

    #[test]
    fn test_step_at_accounts_for_scroll_and_borders() {
        let area = Rect::new(26, 0, 40, 10);
        let mut list = HistoryList::new(SortOrder::Ascending);
        list.scroll_offset = 2;
        assert_eq!(step_at(area, &list, 9, 30, 1), Some(2));
        assert_eq!(step_at(area, &list, 9, 30, 0), None);
        assert_eq!(step_at(area, &list, 9, 26, 1), None);
        assert_eq!(visible_rows(area), 8);
    }
}
