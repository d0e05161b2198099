use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

use crate::clue_store::ClueStore;
use crate::config::{Config, GameSettings};
use crate::console::Console;
use crate::error::Error;
use crate::game::Game;
use crate::metrics;

/// Loads the clues and seeds the random source. Without a seed the source is non-deterministic.
pub fn create_game(settings: &GameSettings, seed: Option<u64>) -> Result<Game<StdRng>, Error> {
    let clues = ClueStore::load(&settings.clues_file_path, settings.max_clues)?;
    let rng = match seed {
        Some(seed) => {
            log::info!("Using a deterministic random source. Seed: '{seed}'.");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    Ok(Game::new(clues, rng).with_max_incorrect_guesses(settings.max_incorrect_guesses))
}

pub fn run(config: Config, seed: Option<u64>) -> Result<(), Error> {
    metrics::register_metrics()?;
    let mut game = create_game(&config.game, seed)?;
    let stdin = io::stdin();
    Console::new(stdin.lock(), io::stdout()).run(&mut game)
}
