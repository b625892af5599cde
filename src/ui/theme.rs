use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 24, 30);
    pub const BG_SURFACE: Color = Color::Rgb(30, 33, 41);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 54);
    pub const BORDER_DIM: Color = Color::Rgb(70, 75, 90);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 156, 170);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 105, 120);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_PINK: Color = Color::Rgb(220, 150, 180);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn mark_x() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn mark_o() -> Style {
        Style::default()
            .fg(Self::ACCENT_PINK)
            .add_modifier(Modifier::BOLD)
    }

    pub fn cell() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn cell_cursor() -> Style {
        Style::default().bg(Self::BORDER_DIM)
    }

    /// Winning squares; `bright` alternates on tick.
    pub fn cell_winning(bright: bool) -> Style {
        let bg = if bright {
            Self::ACCENT_AMBER
        } else {
            Color::Rgb(150, 115, 50)
        };
        Style::default().bg(bg).fg(Self::BG_DARK)
    }

    pub fn status_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_winner() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_tie() -> Style {
        Style::default()
            .fg(Self::TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn move_normal() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn move_current() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn move_selected() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_TEAL)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }
}
