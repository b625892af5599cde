//! Game core: board representation, win detection, and the move-history
//! state machine. Nothing in here knows about the terminal.

pub mod board;
pub mod history;
pub mod state;
pub mod win;

pub use board::{Cell, Mark};
pub use history::SortOrder;
pub use state::{ClickOutcome, GameState, Phase, Status};
