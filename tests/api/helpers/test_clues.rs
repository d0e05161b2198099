use std::path::PathBuf;

use hangman::config::GameSettings;
use tempfile::TempDir;

/// A clue file living in its own temporary directory, removed on drop.
pub struct TestClues {
    pub directory: TempDir,
    pub path: PathBuf,
}

impl TestClues {
    pub fn write(contents: &str) -> TestClues {
        let directory = tempfile::tempdir().expect("Failed to create a temporary directory.");
        let path = directory.path().join("clues.txt");
        std::fs::write(&path, contents).expect("Failed to write the clues file.");
        TestClues { directory, path }
    }

    pub fn single(category: &str, phrase: &str) -> TestClues {
        TestClues::write(&format!("{category}:{phrase}\n"))
    }

    pub fn settings(&self) -> GameSettings {
        GameSettings {
            clues_file_path: self.path.display().to_string(),
            ..GameSettings::default()
        }
    }
}
