use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::clue::Clue;
use crate::error::Error;

/// The pool of clues a round picks from. Never empty and never larger than its capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct ClueStore {
    clues: Vec<Clue>,
    capacity: usize,
}

impl ClueStore {
    pub const DEFAULT_CAPACITY: usize = 125;

    pub fn new(clues: Vec<Clue>, capacity: usize) -> Result<Self, Error> {
        ClueStore::from_lines(
            clues.into_iter().map(|clue| Ok(Ok(clue))),
            "<memory>",
            capacity,
        )
    }

    pub fn load(file_path: impl AsRef<Path>, capacity: usize) -> Result<Self, Error> {
        let file_path = file_path.as_ref();
        let source_name = file_path.display().to_string();
        let file = File::open(file_path).map_err(|error| Error::CluesFile {
            path: source_name.clone(),
            reason: error.to_string(),
        })?;
        let store = ClueStore::from_reader(BufReader::new(file), &source_name, capacity)?;
        log::info!(
            "Clues loaded. File: '{}', Clues: '{}', Capacity: '{}'.",
            source_name,
            store.len(),
            store.capacity
        );
        for clue in store.lower_case_clues() {
            log::warn!(
                "Clue has lower-case letters that typed guesses can never match. File: '{}', Clue: '{}'.",
                source_name,
                clue
            );
        }
        Ok(store)
    }

    pub fn from_reader<R: BufRead>(
        reader: R,
        source_name: &str,
        capacity: usize,
    ) -> Result<Self, Error> {
        ClueStore::from_lines(
            reader.lines().map(|line| {
                line.map(|line| Clue::parse(&line).ok_or(line))
            }),
            source_name,
            capacity,
        )
    }

    pub fn parse(contents: &str, capacity: usize) -> Result<Self, Error> {
        ClueStore::from_reader(contents.as_bytes(), "<memory>", capacity)
    }

    // Each item is either an io failure, a parsed clue or the raw line that had no delimiter.
    fn from_lines<I>(lines: I, source_name: &str, capacity: usize) -> Result<Self, Error>
    where
        I: IntoIterator<Item = io::Result<Result<Clue, String>>>,
    {
        let mut clues = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.map_err(|error| Error::CluesFile {
                path: source_name.to_string(),
                reason: error.to_string(),
            })?;
            if clues.len() >= capacity {
                return Err(Error::TooManyClues(source_name.to_string(), capacity));
            }
            let clue = line.map_err(|line| Error::MalformedClue {
                source_name: source_name.to_string(),
                line_number: index + 1,
                line,
            })?;
            clues.push(clue);
        }

        if clues.is_empty() {
            return Err(Error::NoClues(source_name.to_string()));
        }
        Ok(Self { clues, capacity })
    }

    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Clue {
        &self.clues[rng.gen_range(0..self.clues.len())]
    }

    /// Clues whose phrase has lower-case ASCII letters. The console upper-cases every guess, so those letters stay hidden.
    pub fn lower_case_clues(&self) -> impl Iterator<Item = &Clue> {
        self.clues
            .iter()
            .filter(|clue| clue.phrase().chars().any(|char| char.is_ascii_lowercase()))
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
