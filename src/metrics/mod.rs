use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::Error;

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref ROUNDS_STARTED: IntCounter =
        IntCounter::new("hangman_rounds_started", "Rounds started").expect("metric cannot be created");
    pub static ref ROUNDS_WON: IntCounter =
        IntCounter::new("hangman_rounds_won", "Rounds won").expect("metric cannot be created");
    pub static ref ROUNDS_LOST: IntCounter =
        IntCounter::new("hangman_rounds_lost", "Rounds lost").expect("metric cannot be created");
    pub static ref GUESSES: IntCounterVec = IntCounterVec::new(
        Opts::new("hangman_guesses", "Letters guessed by outcome"),
        &["outcome"]
    )
    .expect("metric cannot be created");
}

pub const CORRECT: &str = "correct";
pub const INCORRECT: &str = "incorrect";

pub fn register_metrics() -> Result<(), Error> {
    let collectors: [Box<dyn prometheus::core::Collector>; 4] = [
        Box::new(ROUNDS_STARTED.clone()),
        Box::new(ROUNDS_WON.clone()),
        Box::new(ROUNDS_LOST.clone()),
        Box::new(GUESSES.clone()),
    ];
    for collector in collectors {
        match REGISTRY.register(collector) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(error) => {
                return Err(Error::log_and_create_internal(&format!(
                    "Collector cannot be registered. Error: '{error}'."
                )))
            }
        }
    }
    Ok(())
}

/// Text exposition of everything in [`REGISTRY`].
pub fn gather() -> Result<String, Error> {
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&REGISTRY.gather(), &mut buffer)
        .map_err(|error| {
            Error::log_and_create_internal(&format!("Metrics cannot be encoded. Error: '{error}'."))
        })?;
    String::from_utf8(buffer).map_err(|error| {
        Error::log_and_create_internal(&format!("Metrics are not valid UTF-8. Error: '{error}'."))
    })
}
