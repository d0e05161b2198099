use rand::Rng;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use crate::error::Error;
use crate::game::game_fsm::GameFsmState;
use crate::game::Game;
use crate::metrics;

/// A line typed by the player.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Guess(char),
    NewGame,
    Quit,
}

impl Command {
    /// Letters are upper-cased so they match the upper-case clue files. Anything else is `None`.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("new") {
            return Some(Command::NewGame);
        }
        if line.eq_ignore_ascii_case("quit") {
            return Some(Command::Quit);
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => {
                Some(Command::Guess(letter.to_ascii_uppercase()))
            }
            _ => None,
        }
    }
}

/// Terminal front-end: draws the gallows and forwards letters to the [`Game`].
pub struct Console<I, O> {
    input: I,
    output: O,
    tried_letters: BTreeSet<char>,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            tried_letters: BTreeSet::new(),
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Plays until `quit` or the end of the input.
    pub fn run<R: Rng>(&mut self, game: &mut Game<R>) -> Result<(), Error> {
        self.start_new_game(game)?;

        loop {
            write!(self.output, "> ").map_err(terminal_error)?;
            self.output.flush().map_err(terminal_error)?;

            let mut line = String::new();
            if self.input.read_line(&mut line).map_err(terminal_error)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(Command::NewGame) => self.start_new_game(game)?,
                Some(Command::Guess(letter)) => self.guess(game, letter)?,
                None => writeln!(
                    self.output,
                    "Type a single letter, 'new' for a new game or 'quit' to leave."
                )
                .map_err(terminal_error)?,
            }
        }

        writeln!(self.output, "Goodbye!").map_err(terminal_error)?;
        if let Ok(metrics) = metrics::gather() {
            log::info!("Session finished. Metrics: '{}'.", metrics.trim_end());
        }
        Ok(())
    }

    fn start_new_game<R: Rng>(&mut self, game: &mut Game<R>) -> Result<(), Error> {
        game.new_game()?;
        self.tried_letters.clear();
        self.render(game)
    }

    fn guess<R: Rng>(&mut self, game: &mut Game<R>, letter: char) -> Result<(), Error> {
        if game.state() != &GameFsmState::InProgress {
            return writeln!(
                self.output,
                "The round is over. Type 'new' to play again or 'quit' to leave."
            )
            .map_err(terminal_error);
        }
        if !self.tried_letters.insert(letter) {
            return writeln!(self.output, "You already tried '{letter}'.").map_err(terminal_error);
        }

        let is_correct = game.guess(letter)?;
        if !is_correct {
            writeln!(self.output, "No '{letter}' in this phrase.").map_err(terminal_error)?;
        }
        self.render(game)?;

        if game.is_won() {
            writeln!(self.output, "You won! Type 'new' to play again.").map_err(terminal_error)?;
        } else if game.is_lost() {
            writeln!(
                self.output,
                "You lost! The phrase was '{}'. Type 'new' to play again.",
                game.current_phrase().unwrap_or_default()
            )
            .map_err(terminal_error)?;
        }
        Ok(())
    }

    fn render<R: Rng>(&mut self, game: &Game<R>) -> Result<(), Error> {
        let stage = gallows_stage(game.incorrect_guesses(), game.max_incorrect_guesses());
        let phrase = if game.is_lost() {
            game.current_phrase().unwrap_or_default().to_string()
        } else {
            game.visible_phrase().unwrap_or_default()
        };
        let tried_letters = self
            .tried_letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        write!(self.output, "{}", gallows(stage)).map_err(terminal_error)?;
        writeln!(
            self.output,
            "Category: {}",
            game.current_category().unwrap_or_default()
        )
        .map_err(terminal_error)?;
        writeln!(self.output, "Phrase:   {}", phrase.trim_end()).map_err(terminal_error)?;
        writeln!(self.output, "Tried:    {tried_letters}").map_err(terminal_error)
    }
}

const BODY_PARTS: u32 = 6;

/// Scales the incorrect guesses to the six drawable body parts.
fn gallows_stage(incorrect_guesses: u32, max_incorrect_guesses: u32) -> u32 {
    if incorrect_guesses >= max_incorrect_guesses {
        BODY_PARTS
    } else {
        incorrect_guesses * BODY_PARTS / max_incorrect_guesses.max(1)
    }
}

fn gallows(stage: u32) -> String {
    let part = |from_stage: u32, drawing: &'static str| {
        if stage >= from_stage {
            drawing
        } else {
            " "
        }
    };
    format!(
        "  +---+\n  |   |\n  {}   |\n {}{}{}  |\n {} {}  |\n      |\n=========\n",
        part(1, "O"),
        part(3, "/"),
        part(2, "|"),
        part(4, "\\"),
        part(5, "/"),
        part(6, "\\"),
    )
}

fn terminal_error(error: std::io::Error) -> Error {
    Error::Terminal(error.to_string())
}
