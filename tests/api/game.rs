use hangman::{
    clue::Clue,
    clue_store::ClueStore,
    error::{domain_error::DomainError, Error},
    game::{game_fsm::GameFsmState, Game},
};
use rand::{rngs::StdRng, SeedableRng};

use crate::helpers::test_clues::TestClues;

fn load_game(clues: &TestClues, seed: u64) -> Game<StdRng> {
    let store = ClueStore::load(&clues.path, ClueStore::DEFAULT_CAPACITY).unwrap();
    Game::new(store, StdRng::seed_from_u64(seed))
}

#[test]
fn cat_walkthrough_works() {
    let clues = TestClues::single("Animals", "CAT");
    let mut game = load_game(&clues, 0);

    game.new_game().unwrap();
    assert_eq!(game.current_category(), Some("Animals"));
    assert_eq!(game.masked_phrase(), Some("___".to_string()));

    assert_eq!(game.guess('A'), Ok(true));
    assert_eq!(game.masked_phrase(), Some("_A_".to_string()));
    assert_eq!(game.correct_guesses(), 1);
    assert_eq!(game.guess('Z'), Ok(false));
    assert_eq!(game.incorrect_guesses(), 1);
    assert_eq!(game.guess('C'), Ok(true));
    assert_eq!(game.masked_phrase(), Some("CA_".to_string()));
    assert_eq!(game.guess('T'), Ok(true));
    assert_eq!(game.masked_phrase(), Some("CAT".to_string()));

    assert!(game.is_won());
    assert_eq!(game.state(), &GameFsmState::Won);
}

#[test]
fn six_wrong_guesses_lose_on_any_phrase() {
    let clues = TestClues::write("Animals:CAT\nFood:APPLE PIE\nPlaces:GRAND CANYON\n");

    for seed in 0..10 {
        let mut game = load_game(&clues, seed);
        game.new_game().unwrap();

        for letter in "0123456789".chars().take(6) {
            assert_eq!(game.guess(letter), Ok(false));
        }

        assert!(game.is_lost());
        assert!(!game.is_won());
        assert_eq!(
            game.guess('1'),
            Err(Error::Domain(DomainError::InvalidStateForGuess(
                GameFsmState::Lost,
                GameFsmState::InProgress
            )))
        );
    }
}

#[test]
fn new_game_masks_every_loaded_phrase() {
    let clues = TestClues::write("Movies:STAR WARS\nPhrases:ONCE IN A BLUE MOON\nEmpty:\n");
    let mut game = load_game(&clues, 11);

    for _ in 0..30 {
        game.new_game().unwrap();
        let phrase = game.current_phrase().unwrap().to_string();
        let masked = game.masked_phrase().unwrap();

        assert_eq!(masked.chars().count(), phrase.chars().count());
        for (masked, char) in masked.chars().zip(phrase.chars()) {
            if char == ' ' {
                assert_eq!(masked, ' ');
            } else {
                assert_eq!(masked, '_');
            }
        }
        assert!(game
            .clues()
            .clues()
            .contains(&Clue::new(game.current_category().unwrap(), phrase)));
    }
}

#[test]
fn revealing_every_letter_wins() {
    let clues = TestClues::single("Phrases", "BETTER LATE THAN NEVER");
    let mut game = load_game(&clues, 5);
    game.new_game().unwrap();

    for letter in "BETRLAHNV".chars() {
        assert!(!game.is_won());
        assert_eq!(game.guess(letter), Ok(true));
    }

    assert!(game.is_won());
    assert_eq!(game.incorrect_guesses(), 0);
    assert_eq!(game.correct_guesses(), 9);
}

#[test]
fn same_seed_replays_same_rounds() {
    let clues = TestClues::write(
        "A:ONE\nB:TWO\nC:THREE\nD:FOUR\nE:FIVE\nF:SIX\nG:SEVEN\nH:EIGHT\nI:NINE\nJ:TEN\n",
    );
    let mut game_1 = load_game(&clues, 2024);
    let mut game_2 = load_game(&clues, 2024);

    for _ in 0..10 {
        game_1.new_game().unwrap();
        game_2.new_game().unwrap();
        assert_eq!(game_1.round().unwrap().clue(), game_2.round().unwrap().clue());
    }
}
