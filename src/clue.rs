use std::fmt::Display;

/// A category hint and the phrase the player has to guess.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clue {
    category: String,
    phrase: String,
}

impl Clue {
    pub const DELIMITER: char = ':';

    pub fn new(category: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            phrase: phrase.into(),
        }
    }

    /// Splits `line` on the first delimiter. Nothing is trimmed, so empty categories or phrases are kept.
    pub fn parse(line: &str) -> Option<Self> {
        line.split_once(Clue::DELIMITER)
            .map(|(category, phrase)| Clue::new(category, phrase))
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.category, self.phrase)
    }
}
