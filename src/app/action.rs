use crate::game::{Cell, Mark, Status};

/// Side effects the event loop performs after a state transition.
#[derive(Debug, PartialEq)]
pub enum Action {
    RecordMove { step: usize, mark: Mark, cell: Cell },
    RecordJump { step: usize },
    GameOver { status: Status },
    Quit,
}
