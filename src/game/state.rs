//! Move history and the time-travel state machine.

use super::board::{Board, Cell, Mark};
use super::win::{calculate_winner, WinInfo};
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("step {step} is outside the history (last step is {last})")]
    StepOutOfRange { step: usize, last: usize },
}

/// One history entry: the board after a move, plus the cell that was played.
/// The initial entry has no placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub squares: Board,
    pub placed: Option<Cell>,
}

impl Move {
    fn initial() -> Self {
        Self {
            squares: Board::new(),
            placed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won(WinInfo),
    Tied,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

/// What a click did. Rejected clicks leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Placed { mark: Mark, cell: Cell, step: usize },
    Occupied,
    GameOver,
}

/// The line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Tie,
    Winner(Mark),
    NextPlayer(Mark),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Tie => f.write_str("Tie"),
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// Status for a displayed position. A win on the ninth move is a win, not a tie.
pub fn status(winner: Option<Mark>, step_number: usize) -> Status {
    match winner {
        Some(mark) => Status::Winner(mark),
        None if step_number >= Cell::COUNT => Status::Tie,
        None => Status::NextPlayer(Mark::to_play_at(step_number)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Move>,
    step_number: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Move::initial()],
            step_number: 0,
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn step_number(&self) -> usize {
        self.step_number
    }

    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    pub fn current(&self) -> &Move {
        &self.history[self.step_number]
    }

    pub fn board(&self) -> &Board {
        &self.current().squares
    }

    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn winner(&self) -> Option<WinInfo> {
        calculate_winner(self.board())
    }

    pub fn phase(&self) -> Phase {
        match self.winner() {
            Some(info) => Phase::Won(info),
            None if self.board().is_full() => Phase::Tied,
            None => Phase::InProgress,
        }
    }

    pub fn status(&self) -> Status {
        status(self.winner().map(|w| w.winner), self.step_number)
    }

    /// Plays `cell` for the side to move. Any moves after the displayed
    /// position are discarded first.
    pub fn handle_click(&mut self, cell: Cell) -> ClickOutcome {
        let board = *self.board();
        if calculate_winner(&board).is_some() {
            return ClickOutcome::GameOver;
        }
        if board.is_occupied(cell) {
            return ClickOutcome::Occupied;
        }

        let mark = self.next_mark();
        self.history.truncate(self.step_number + 1);
        self.history.push(Move {
            squares: board.with_mark(cell, mark),
            placed: Some(cell),
        });
        self.step_number = self.history.len() - 1;
        debug!(
            step = self.step_number,
            mark = %mark,
            row = cell.row(),
            col = cell.col(),
            "move placed"
        );

        ClickOutcome::Placed {
            mark,
            cell,
            step: self.step_number,
        }
    }

    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                last: self.last_step(),
            });
        }
        self.step_number = step;
        debug!(step, "jumped in history");
        Ok(())
    }

    /// Returns `true` if the displayed step changed.
    pub fn step_back(&mut self) -> bool {
        match self.step_number.checked_sub(1) {
            Some(step) => self.jump_to(step).is_ok(),
            None => false,
        }
    }

    /// Returns `true` if the displayed step changed.
    pub fn step_forward(&mut self) -> bool {
        self.jump_to(self.step_number + 1).is_ok()
    }
}
