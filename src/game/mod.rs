pub mod game_fsm;

use rand::Rng;
use rust_fsm::StateMachine;

use crate::clue_store::ClueStore;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game::game_fsm::{GameFsm, GameFsmInput, GameFsmState};
use crate::metrics::{CORRECT, GUESSES, INCORRECT, ROUNDS_LOST, ROUNDS_STARTED, ROUNDS_WON};
use crate::round::Round;

/// Owns the clue pool, the random source and the round being played.
pub struct Game<R> {
    clues: ClueStore,
    rng: R,
    fsm: StateMachine<GameFsm>,
    round: Option<Round>,
    max_incorrect_guesses: u32,
}

impl<R: Rng> Game<R> {
    pub const DEFAULT_MAX_INCORRECT_GUESSES: u32 = 6;

    pub fn new(clues: ClueStore, rng: R) -> Self {
        Self {
            clues,
            rng,
            fsm: StateMachine::default(),
            round: None,
            max_incorrect_guesses: Self::DEFAULT_MAX_INCORRECT_GUESSES,
        }
    }

    pub fn with_max_incorrect_guesses(mut self, max_incorrect_guesses: u32) -> Self {
        self.max_incorrect_guesses = max_incorrect_guesses;
        self
    }

    pub fn state(&self) -> &GameFsmState {
        self.fsm.state()
    }

    pub fn clues(&self) -> &ClueStore {
        &self.clues
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn max_incorrect_guesses(&self) -> u32 {
        self.max_incorrect_guesses
    }

    /// Picks a new clue and resets the round. Allowed from every state.
    pub fn new_game(&mut self) -> Result<(), Error> {
        let clue = self.clues.pick_random(&mut self.rng).clone();
        log::info!(
            "New round started. Category: '{}', PhraseLength: '{}'.",
            clue.category(),
            clue.phrase().chars().count()
        );
        self.round = Some(Round::new(clue));
        ROUNDS_STARTED.inc();
        self.process_event(&GameFsmInput::NewGame)?;
        // Blank phrases start solved and a zero threshold starts lost.
        self.finish_round_if_over()
    }

    /// Applies one letter to the current round and returns whether it was in the phrase.
    pub fn guess(&mut self, letter: char) -> Result<bool, Error> {
        if self.state() != &GameFsmState::InProgress {
            return Err(Error::Domain(DomainError::InvalidStateForGuess(
                self.state().to_owned(),
                GameFsmState::InProgress,
            )));
        }
        let round = self.round.as_mut().ok_or_else(|| {
            Error::log_and_create_internal("The game is in progress but there is no round.")
        })?;

        let is_correct = round.guess(letter);
        log::debug!(
            "Letter guessed. Letter: '{}', IsCorrect: '{}', CorrectGuesses: '{}', IncorrectGuesses: '{}'.",
            letter,
            is_correct,
            round.correct_guesses(),
            round.incorrect_guesses()
        );
        GUESSES
            .with_label_values(&[if is_correct { CORRECT } else { INCORRECT }])
            .inc();

        self.finish_round_if_over()?;
        Ok(is_correct)
    }

    pub fn is_won(&self) -> bool {
        self.round.as_ref().is_some_and(Round::is_solved)
    }

    pub fn is_lost(&self) -> bool {
        self.incorrect_guesses() >= self.max_incorrect_guesses
    }

    pub fn current_category(&self) -> Option<&str> {
        self.round.as_ref().map(Round::category)
    }

    pub fn current_phrase(&self) -> Option<&str> {
        self.round.as_ref().map(Round::phrase)
    }

    pub fn masked_phrase(&self) -> Option<String> {
        self.round.as_ref().map(Round::masked_phrase)
    }

    pub fn visible_phrase(&self) -> Option<String> {
        self.round.as_ref().map(Round::visible_phrase)
    }

    pub fn correct_guesses(&self) -> u32 {
        self.round.as_ref().map_or(0, Round::correct_guesses)
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.round.as_ref().map_or(0, Round::incorrect_guesses)
    }

    fn process_event(&mut self, event: &GameFsmInput) -> Result<(), Error> {
        match self.fsm.consume(event) {
            Ok(_) => {
                match self.fsm.state() {
                    GameFsmState::Won => {
                        ROUNDS_WON.inc();
                        log::info!("Round won. Guesses: '{}'.", self.guesses());
                    }
                    GameFsmState::Lost => {
                        ROUNDS_LOST.inc();
                        log::info!("Round lost. Guesses: '{}'.", self.guesses());
                    }
                    GameFsmState::NotStarted | GameFsmState::InProgress => {}
                }
                Ok(())
            }
            Err(error) => Err(Error::log_and_create_internal(&format!(
                "The fsm in state {:?} can't transition with an event {:?}. Error: '{error}'.",
                self.fsm.state(),
                event
            ))),
        }
    }

    fn finish_round_if_over(&mut self) -> Result<(), Error> {
        if self.is_won() {
            self.process_event(&GameFsmInput::PhraseRevealed)
        } else if self.is_lost() {
            self.process_event(&GameFsmInput::GuessesExhausted)
        } else {
            Ok(())
        }
    }

    fn guesses(&self) -> u32 {
        self.round.as_ref().map_or(0, Round::guesses)
    }
}
