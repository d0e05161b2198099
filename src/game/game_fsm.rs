use std::fmt;

use rust_fsm::state_machine;

state_machine! {
    derive(Debug, Clone, PartialEq)
    pub GameFsm(NotStarted)

    NotStarted => {
        NewGame => InProgress
    },
    InProgress => {
        NewGame => InProgress,
        PhraseRevealed => Won,
        GuessesExhausted => Lost,
    },
    Won => {
        NewGame => InProgress
    },
    Lost => {
        NewGame => InProgress
    }
}

impl fmt::Display for GameFsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
