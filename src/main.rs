use std::process::ExitCode;

use clap::Parser;
use hangman::config::Config;
use hangman::startup;

#[derive(Parser)]
#[command(author, version, about = "Guess the hidden phrase one letter at a time", long_about = None)]
struct Args {
    /// Seed for the clue picker, makes the sequence of phrases repeatable
    seed: Option<u64>,
}

fn main() -> ExitCode {
    std_logger::Config::logfmt().init();
    let args = Args::parse();

    match Config::get().and_then(|config| startup::run(config, args.seed)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("The game stopped. Error: '{error}'.");
            ExitCode::FAILURE
        }
    }
}
