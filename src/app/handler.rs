use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::game::{Cell, ClickOutcome, Phase};
use crate::ui;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);

    // Only the winning-line pulse animates.
    if state.config.ui.highlight_winning_line && matches!(state.game.phase(), Phase::Won(_)) {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) if state.config.behavior.mouse => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            let visible = visible_history_rows(state);
            state.history.ensure_visible(visible);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Help overlay captures all input when visible
    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1)) {
            state.show_help = false;
        }
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.show_help = true;
            return vec![];
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            toggle_order(state);
            return vec![];
        }
        KeyCode::Char('[') => {
            let moved = state.game.step_back();
            return after_step(state, moved);
        }
        KeyCode::Char(']') => {
            let moved = state.game.step_forward();
            return after_step(state, moved);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            return match Cell::new(index) {
                Some(cell) => {
                    state.cursor = cell;
                    click(state, cell)
                }
                None => vec![],
            };
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Board => handle_board_key(state, key),
        FocusPanel::History => handle_history_key(state, key),
    }
}

fn handle_board_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let (d_row, d_col) = match key.code {
        KeyCode::Up | KeyCode::Char('k') => (-1, 0),
        KeyCode::Down | KeyCode::Char('j') => (1, 0),
        KeyCode::Left | KeyCode::Char('h') => (0, -1),
        KeyCode::Right | KeyCode::Char('l') => (0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cell = state.cursor;
            return click(state, cell);
        }
        _ => return vec![],
    };
    state.cursor = state.cursor.offset(d_row, d_col);
    vec![]
}

fn handle_history_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let total = state.history_len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.history.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.history.move_down(total),
        KeyCode::PageUp => {
            for _ in 0..10 {
                state.history.move_up();
            }
        }
        KeyCode::PageDown => {
            for _ in 0..10 {
                state.history.move_down(total);
            }
        }
        KeyCode::Home => state.history.selected = 0,
        KeyCode::End => state.history.selected = total.saturating_sub(1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            return match state.history.selected_step(total) {
                Some(step) => jump(state, step),
                None => vec![],
            };
        }
        _ => return vec![],
    }
    let visible = visible_history_rows(state);
    state.history.ensure_visible(visible);
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let app_layout = ui::layout::compute_layout(state.viewport);
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(cell) = ui::board::cell_at(app_layout.board, x, y) {
                state.focus = FocusPanel::Board;
                state.cursor = cell;
                return click(state, cell);
            }
            let len = state.history_len();
            if let Some(step) = ui::move_list::step_at(app_layout.move_list, &state.history, len, x, y)
            {
                state.focus = FocusPanel::History;
                return jump(state, step);
            }
            vec![]
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
            if ui::layout::contains(app_layout.move_list, x, y) =>
        {
            if mouse.kind == MouseEventKind::ScrollUp {
                state.history.move_up();
            } else {
                let total = state.history_len();
                state.history.move_down(total);
            }
            let visible = visible_history_rows(state);
            state.history.ensure_visible(visible);
            vec![]
        }
        _ => vec![],
    }
}

/// Plays `cell` and reports the side effects. Rejected clicks are silent.
fn click(state: &mut AppState, cell: Cell) -> Vec<Action> {
    match state.game.handle_click(cell) {
        ClickOutcome::Placed { mark, cell, step } => {
            follow_current_step(state);
            let mut actions = vec![Action::RecordMove { step, mark, cell }];
            if state.game.phase().is_terminal() {
                actions.push(Action::GameOver {
                    status: state.game.status(),
                });
            }
            actions
        }
        rejected => {
            debug!(?rejected, square = cell.index(), "click ignored");
            vec![]
        }
    }
}

fn jump(state: &mut AppState, step: usize) -> Vec<Action> {
    match state.game.jump_to(step) {
        Ok(()) => {
            follow_current_step(state);
            vec![Action::RecordJump { step }]
        }
        Err(e) => {
            debug!(error = %e, "jump ignored");
            vec![]
        }
    }
}

fn after_step(state: &mut AppState, moved: bool) -> Vec<Action> {
    if !moved {
        return vec![];
    }
    follow_current_step(state);
    vec![Action::RecordJump {
        step: state.game.step_number(),
    }]
}

fn toggle_order(state: &mut AppState) {
    let len = state.history_len();
    state.history.toggle_order(len);
    let visible = visible_history_rows(state);
    state.history.ensure_visible(visible);
}

fn follow_current_step(state: &mut AppState) {
    state.sync_history_selection();
    let visible = visible_history_rows(state);
    state.history.ensure_visible(visible);
}

fn visible_history_rows(state: &AppState) -> usize {
    let app_layout = ui::layout::compute_layout(state.viewport);
    ui::move_list::visible_rows(app_layout.move_list)
}
