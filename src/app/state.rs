use crate::config::AppConfig;
use crate::game::{Cell, GameState, SortOrder};
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Board,
    History,
}

/// Selection and scroll state of the move list, in display rows.
#[derive(Debug)]
pub struct HistoryList {
    pub order: SortOrder,
    pub selected: usize,
    pub scroll_offset: usize,
}

impl HistoryList {
    pub fn new(order: SortOrder) -> Self {
        Self {
            order,
            selected: 0,
            scroll_offset: 0,
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
    }

    pub fn ensure_visible(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected + 1 - visible_rows;
        }
    }

    /// History step under the selection.
    pub fn selected_step(&self, len: usize) -> Option<usize> {
        self.order.step_at(self.selected, len)
    }

    pub fn select_step(&mut self, step: usize, len: usize) {
        if let Some(row) = self.order.row_of(step, len) {
            self.selected = row;
        }
    }

    /// Flips the order, keeping the selection on the same step.
    pub fn toggle_order(&mut self, len: usize) {
        let step = self.selected_step(len);
        self.order = self.order.toggled();
        if let Some(step) = step {
            self.select_step(step, len);
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub game: GameState,
    pub history: HistoryList,
    pub cursor: Cell,
    pub focus: FocusPanel,
    pub show_help: bool,
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let order = if config.ui.history_descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        Self {
            config,
            game: GameState::new(),
            history: HistoryList::new(order),
            cursor: Cell::ALL[4],
            focus: FocusPanel::Board,
            show_help: false,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
            tick_count: 0,
        }
    }

    pub fn history_len(&self) -> usize {
        self.game.history().len()
    }

    /// Points the move-list selection at the displayed step.
    pub fn sync_history_selection(&mut self) {
        let len = self.history_len();
        self.history.select_step(self.game.step_number(), len);
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Board => FocusPanel::History,
            FocusPanel::History => FocusPanel::Board,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        format!(
            "Move {}/{}",
            self.game.step_number(),
            self.game.last_step()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_list_scrolls_to_selection() {
        let mut list = HistoryList::new(SortOrder::Ascending);
        for _ in 0..7 {
            list.move_down(10);
        }
        list.ensure_visible(5);
        assert_eq!(list.selected, 7);
        assert_eq!(list.scroll_offset, 3);
        for _ in 0..7 {
            list.move_up();
        }
        list.ensure_visible(5);
        assert_eq!(list.scroll_offset, 0);
    }

    #[test]
    fn test_move_down_stops_at_end() {
        let mut list = HistoryList::new(SortOrder::Ascending);
        list.move_down(2);
        list.move_down(2);
        assert_eq!(list.selected, 1);
    }

    #[test]
    fn test_toggle_order_keeps_step_selected() {
        let mut list = HistoryList::new(SortOrder::Ascending);
        list.select_step(1, 4);
        list.toggle_order(4);
        assert_eq!(list.order, SortOrder::Descending);
        assert_eq!(list.selected, 2);
        assert_eq!(list.selected_step(4), Some(1));
    }

    #[test]
    fn test_new_state_honours_config_order() {
        let mut config = AppConfig::default();
        config.ui.history_descending = true;
        let state = AppState::new(config);
        assert_eq!(state.history.order, SortOrder::Descending);
        assert_eq!(state.focus, FocusPanel::Board);
        assert_eq!(state.status_line(), "Move 0/0");
    }
}
