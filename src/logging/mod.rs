//! Diagnostics and game transcripts.
//!
//! When enabled, `tracing` output goes to `crabtoe.log` and a readable record
//! of every move, jump and result goes to a daily `games_<date>.log`, both in
//! the configured log directory (default: `~/.local/share/crabtoe/logs/`).

use crate::config::{expand_home, LoggingConfig};
use crate::game::{Cell, Mark, Status};
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

/// Installs the global `tracing` subscriber. The terminal belongs to the UI,
/// so nothing is installed unless file logging is enabled.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join("crabtoe.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let level = config.level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Appends game events to the daily transcript file.
///
/// The file is opened on first write. Write failures are dropped; a broken
/// transcript must never interrupt play.
pub struct GameLogger {
    enabled: bool,
    log_dir: PathBuf,
    file: Option<fs::File>,
}

impl GameLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled && config.transcript,
            log_dir: expand_home(&config.log_dir),
            file: None,
        }
    }

    pub fn log_move(&mut self, step: usize, mark: Mark, cell: Cell) {
        self.write_line(&format_move(step, mark, cell));
    }

    pub fn log_jump(&mut self, step: usize) {
        self.write_line(&format!("jump to step {}", step));
    }

    pub fn log_result(&mut self, status: Status) {
        self.write_line(&format!("result: {}", status));
    }

    fn write_line(&mut self, text: &str) {
        if !self.enabled {
            return;
        }
        if self.file.is_none() {
            let date = chrono::Local::now().format("%Y-%m-%d").to_string();
            let path = self.log_dir.join(format!("games_{}.log", date));
            let _ = fs::create_dir_all(&self.log_dir);
            self.file = OpenOptions::new().create(true).append(true).open(path).ok();
        }
        if let Some(file) = self.file.as_mut() {
            let timestamp = chrono::Local::now().format("%H:%M:%S");
            let _ = writeln!(file, "[{}] {}", timestamp, text);
        }
    }
}

fn format_move(step: usize, mark: Mark, cell: Cell) -> String {
    format!(
        "move #{}: {} at (col {}, row {})",
        step,
        mark,
        cell.col(),
        cell.row()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_move() {
        let cell = Cell::new(7).unwrap();
        assert_eq!(format_move(3, Mark::X, cell), "move #3: X at (col 1, row 2)");
    }

    #[test]
    fn test_transcript_written_when_enabled() {
        let dir = std::env::temp_dir().join(format!("crabtoe-log-test-{}", std::process::id()));
        let config = LoggingConfig {
            enabled: true,
            log_dir: dir.display().to_string(),
            level: "info".to_string(),
            transcript: true,
        };
        let mut logger = GameLogger::new(&config);
        logger.log_move(1, Mark::X, Cell::new(4).unwrap());
        logger.log_result(Status::Winner(Mark::X));
        drop(logger);

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let contents = fs::read_to_string(dir.join(format!("games_{}.log", date))).unwrap();
        assert!(contents.contains("move #1: X at (col 1, row 1)"));
        assert!(contents.contains("result: Winner: X"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("crabtoe-off-test-{}", std::process::id()));
        let config = LoggingConfig {
            enabled: false,
            log_dir: dir.display().to_string(),
            level: "info".to_string(),
            transcript: true,
        };
        let mut logger = GameLogger::new(&config);
        logger.log_jump(0);
        assert!(!dir.exists());
    }
}
