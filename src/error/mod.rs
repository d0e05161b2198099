pub mod domain_error;

use thiserror::Error;

use self::domain_error::DomainError;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Domain Error. Error: '{0}'.")]
    Domain(DomainError),
    #[error("Invalid configuration. Error: '{0}'.")]
    Config(String),
    #[error("Could not read the clues file. File: '{path}', Error: '{reason}'.")]
    CluesFile { path: String, reason: String },
    #[error("A clue line is missing the ':' delimiter. Source: '{source_name}', LineNumber: '{line_number}', Line: '{line}'.")]
    MalformedClue {
        source_name: String,
        line_number: usize,
        line: String,
    },
    #[error("The clue source has more clues than allowed. Source: '{0}', MaximumClues: '{1}'.")]
    TooManyClues(String, usize),
    #[error("The clue source does not contain any clue. Source: '{0}'.")]
    NoClues(String),
    #[error("Could not talk to the terminal. Error: '{0}'.")]
    Terminal(String),
    #[error("Internal Error. Error: '{0}'.")]
    Internal(String),
}

impl Error {
    /// Errors that make the clue store or the settings unusable. The process cannot start a round after any of them.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Error::Config(_)
            | Error::CluesFile { .. }
            | Error::MalformedClue { .. }
            | Error::TooManyClues(_, _)
            | Error::NoClues(_) => true,
            Error::Domain(_) | Error::Terminal(_) | Error::Internal(_) => false,
        }
    }

    pub fn log_and_create_internal(message: &str) -> Error {
        log::error!("{message}");
        Error::Internal(message.to_string())
    }
}

impl From<DomainError> for Error {
    fn from(error: DomainError) -> Self {
        Error::Domain(error)
    }
}
