use hangman::{
    clue_store::ClueStore,
    console::Console,
    game::{game_fsm::GameFsmState, Game},
};
use rand::{rngs::StdRng, SeedableRng};

use crate::helpers::test_clues::TestClues;

fn play(clues: &TestClues, input: &str) -> (Game<StdRng>, String) {
    let store = ClueStore::load(&clues.path, ClueStore::DEFAULT_CAPACITY).unwrap();
    let mut game = Game::new(store, StdRng::seed_from_u64(9));
    let mut console = Console::new(input.as_bytes(), Vec::new());
    console.run(&mut game).unwrap();
    (game, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn full_session_works() {
    let clues = TestClues::single("Animals", "CAT");

    let (game, output) = play(&clues, "c\nz\na\nt\nnew\nq\nquit\n");

    assert!(output.contains("Phrase:   _ _ _"));
    assert!(output.contains("No 'Z' in this phrase."));
    assert!(output.contains("Phrase:   C A T"));
    assert!(output.contains("You won!"));
    assert!(output.contains("Tried:    A, C, T, Z"));
    assert_eq!(game.state(), &GameFsmState::InProgress);
    assert_eq!(game.incorrect_guesses(), 1);
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn gallows_grows_with_incorrect_guesses() {
    let clues = TestClues::single("Animals", "CAT");

    let (_, output) = play(&clues, "b\nd\ne\nf\ng\nh\n");

    assert!(output.contains("  O   |\n /|\\  |\n / \\  |\n"));
    assert!(output.contains("You lost! The phrase was 'CAT'."));
}
