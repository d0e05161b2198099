use thiserror::Error;

use crate::game::game_fsm::GameFsmState;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Invalid state for guessing a letter. ActualState: '{0}', ExpectedState: '{1}'.")]
    InvalidStateForGuess(GameFsmState, GameFsmState),
}
