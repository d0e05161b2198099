pub mod clue;
pub mod clue_store;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod metrics;
pub mod round;
pub mod startup;
