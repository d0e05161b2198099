use hangman::{
    config::GameSettings,
    error::Error,
    game::game_fsm::GameFsmState,
    startup::create_game,
};

use crate::helpers::test_clues::TestClues;

#[test]
fn create_game_loads_configured_clues() {
    let clues = TestClues::single("Animals", "CAT");
    let settings = GameSettings {
        max_incorrect_guesses: 3,
        ..clues.settings()
    };

    let mut game = create_game(&settings, Some(1)).unwrap();

    assert_eq!(game.state(), &GameFsmState::NotStarted);
    assert_eq!(game.clues().len(), 1);
    assert_eq!(game.max_incorrect_guesses(), 3);
    game.new_game().unwrap();
    assert_eq!(game.current_phrase(), Some("CAT"));
}

#[test]
fn create_game_without_seed_works() {
    let clues = TestClues::write("Animals:CAT\nFood:PIE\n");

    let mut game = create_game(&clues.settings(), None).unwrap();

    game.new_game().unwrap();
    assert!(["CAT", "PIE"].contains(&game.current_phrase().unwrap()));
}

#[test]
fn missing_clues_file_is_a_configuration_error() {
    let clues = TestClues::single("Animals", "CAT");
    let settings = GameSettings {
        clues_file_path: clues.directory.path().join("missing.txt").display().to_string(),
        ..GameSettings::default()
    };

    let error = create_game(&settings, None).err().unwrap();

    assert!(matches!(error, Error::CluesFile { .. }));
    assert!(error.is_configuration_error());
}

#[test]
fn malformed_clues_file_is_a_configuration_error() {
    let clues = TestClues::write("Animals:CAT\nno delimiter here\n");

    let error = create_game(&clues.settings(), None).err().unwrap();

    assert_eq!(
        error,
        Error::MalformedClue {
            source_name: clues.path.display().to_string(),
            line_number: 2,
            line: "no delimiter here".to_string(),
        }
    );
}

#[test]
fn too_many_clues_is_a_configuration_error() {
    let clues = TestClues::write("A:ONE\nB:TWO\nC:THREE\n");
    let settings = GameSettings {
        max_clues: 2,
        ..clues.settings()
    };

    let error = create_game(&settings, None).err().unwrap();

    assert!(matches!(error, Error::TooManyClues(_, 2)));
}
