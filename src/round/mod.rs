use crate::clue::Clue;

/// One playthrough of a clue: the masked phrase and the guess counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    clue: Clue,
    masked_phrase: Vec<char>,
    correct_guesses: u32,
    incorrect_guesses: u32,
}

impl Round {
    pub const PLACEHOLDER: char = '_';

    pub fn new(clue: Clue) -> Self {
        let masked_phrase = clue
            .phrase()
            .chars()
            .map(|char| if char == ' ' { ' ' } else { Round::PLACEHOLDER })
            .collect();
        Round {
            clue,
            masked_phrase,
            correct_guesses: 0,
            incorrect_guesses: 0,
        }
    }

    /// Reveals every position holding `letter`. Matching is case-sensitive.
    /// A letter that is already revealed still counts as a correct guess.
    pub fn guess(&mut self, letter: char) -> bool {
        let mut is_correct = false;
        for (masked, char) in self.masked_phrase.iter_mut().zip(self.clue.phrase().chars()) {
            if char == letter {
                *masked = letter;
                is_correct = true;
            }
        }

        if is_correct {
            self.correct_guesses += 1;
        } else {
            self.incorrect_guesses += 1;
        }
        is_correct
    }

    pub fn is_solved(&self) -> bool {
        !self.masked_phrase.contains(&Round::PLACEHOLDER)
    }

    pub fn clue(&self) -> &Clue {
        &self.clue
    }

    pub fn category(&self) -> &str {
        self.clue.category()
    }

    pub fn phrase(&self) -> &str {
        self.clue.phrase()
    }

    pub fn masked_phrase(&self) -> String {
        self.masked_phrase.iter().collect()
    }

    /// The masked phrase with a space after every character, e.g. `"_ A _ "`.
    pub fn visible_phrase(&self) -> String {
        self.masked_phrase
            .iter()
            .flat_map(|char| [*char, ' '])
            .collect()
    }

    pub fn correct_guesses(&self) -> u32 {
        self.correct_guesses
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    pub fn guesses(&self) -> u32 {
        self.correct_guesses + self.incorrect_guesses
    }
}
