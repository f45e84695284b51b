//! Loading the word list the anagrams are drawn from.
//!
//! One word per line. Lines are trimmed and blank lines skipped; everything
//! else, duplicates and capitalization included, is kept as written and in
//! file order.

use std::fs;
use std::path::Path;

use crate::error::AnagramError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    pub words: Vec<Box<str>>,
}

impl Dictionary {
    pub fn parse_from_str(contents: &str) -> Self {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(Into::into)
            .collect();

        Dictionary { words }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnagramError> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse_from_str(&contents))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
