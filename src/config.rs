use std::path::Path;

use serde::Deserialize;
use serde_aux::prelude::deserialize_number_from_string;

use crate::error::Error;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub game: GameSettings,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GameSettings {
    /// One `category:phrase` per line. Phrases should be upper case, the console upper-cases every guess.
    pub clues_file_path: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_clues: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_incorrect_guesses: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            clues_file_path: "clues/en.txt".to_string(),
            max_clues: 125,
            max_incorrect_guesses: 6,
        }
    }
}

impl GameSettings {
    fn validate(&self) -> Result<(), Error> {
        if self.max_clues == 0 {
            return Err(Error::Config(
                "game.max_clues must be at least 1.".to_string(),
            ));
        }
        if self.max_incorrect_guesses == 0 {
            return Err(Error::Config(
                "game.max_incorrect_guesses must be at least 1.".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn get() -> Result<Config, Error> {
        let base_path = std::env::current_dir().map_err(|error| {
            Error::Config(format!(
                "Failed to determine the current directory. Error: '{error}'."
            ))
        })?;
        Config::from_directory(&base_path.join("config"))
    }

    /// Reads `base.yaml` and the `ENVIRONMENT` specific file from `configuration_directory`.
    /// Variables like `APP_GAME__MAX_INCORRECT_GUESSES` override both files.
    pub fn from_directory(configuration_directory: &Path) -> Result<Config, Error> {
        let environment = match std::env::var("ENVIRONMENT") {
            Ok(environment) => Environment::try_from(environment).map_err(Error::Config)?,
            Err(_) => Environment::Dev,
        };
        Config::from_sources(configuration_directory, environment, "APP")
    }

    fn from_sources(
        configuration_directory: &Path,
        environment: Environment,
        variables_prefix: &str,
    ) -> Result<Config, Error> {
        let environment_filename = format!("{}.yaml", environment.as_str());

        let config = config::Config::builder()
            .add_source(config::File::from(
                configuration_directory.join("base.yaml"),
            ))
            .add_source(config::File::from(
                configuration_directory.join(environment_filename),
            ))
            .add_source(
                config::Environment::with_prefix(variables_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .and_then(|config| config.try_deserialize::<Config>())
            .map_err(|error| Error::Config(error.to_string()))?;

        config.game.validate()?;
        log::info!(
            "Configuration loaded. Environment: '{}', CluesFile: '{}', MaxClues: '{}', MaxIncorrectGuesses: '{}'.",
            environment.as_str(),
            config.game.clues_file_path,
            config.game.max_clues,
            config.game.max_incorrect_guesses
        );
        Ok(config)
    }
}

#[derive(Debug, PartialEq)]
enum Environment {
    Dev,
    Prod,
}

const DEV: &str = "dev";
const PROD: &str = "prod";

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => DEV,
            Environment::Prod => PROD,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        match string.to_lowercase().as_str() {
            DEV => Ok(Self::Dev),
            PROD => Ok(Self::Prod),
            other => Err(format!(
                "{other} is not a supported environment. Use either `{DEV}` or `{PROD}`.",
            )),
        }
    }
}
