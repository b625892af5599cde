//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the game works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Appearance of the board and move list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start with the move list sorted newest first.
    #[serde(default)]
    pub history_descending: bool,
    #[serde(default = "default_true")]
    pub highlight_winning_line: bool,
    /// Show `(col, row, symbol)` next to each move.
    #[serde(default = "default_true")]
    pub show_coordinates: bool,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            history_descending: false,
            highlight_winning_line: true,
            show_coordinates: true,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Input and notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub mouse: bool,
    #[serde(default)]
    pub bell_on_game_over: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            bell_on_game_over: false,
        }
    }
}

/// Diagnostic log and game transcript settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` level for `crabtoe.log` (`error` .. `trace`).
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub transcript: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
            transcript: true,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    250
}
fn default_log_dir() -> String {
    "~/.local/share/crabtoe/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert!(!cfg.ui.history_descending);
        assert!(cfg.ui.highlight_winning_line);
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert!(cfg.behavior.mouse);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            history_descending = true

            [logging]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(cfg.ui.history_descending);
        assert!(cfg.ui.show_coordinates);
        assert!(cfg.logging.enabled);
        assert!(cfg.logging.transcript);
        assert_eq!(cfg.logging.level, "debug");
        assert!(!cfg.behavior.bell_on_game_over);
    }
}
