//! Dictionary of standard and custom words
//!
//! Flat file format: comma-separated tokens on any number of lines. A token
//! ending in `~` is a custom word; everything else is a standard word.

use super::decode::read_lossy;
use super::embedded::FALLBACK_WORDS;
use super::error::{Result, StorageError};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io::{self, Read, Write};

/// Suffix that marks a custom word in the dictionary file
pub const CUSTOM_SUFFIX: char = '~';

/// Standard and user-added words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRepository {
    standard: Vec<Word>,
    custom: Vec<Word>,
}

impl WordRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a dictionary from any byte source
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so the affected token
    /// is skipped as not being a word.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source cannot be read.
    pub fn load<R: Read>(source: R) -> io::Result<Self> {
        let repo = Self::parse(&read_lossy(source)?);

        log::info!(
            "Loaded {} standard and {} custom words",
            repo.standard.len(),
            repo.custom.len()
        );
        Ok(repo)
    }

    /// Parse dictionary text already in memory
    ///
    /// # Examples
    /// ```
    /// use hangman::storage::WordRepository;
    ///
    /// let repo = WordRepository::parse("dog,cat,bird~,");
    /// let standard: Vec<&str> = repo.standard_words().iter().map(|w| w.text()).collect();
    /// let custom: Vec<&str> = repo.custom_words().iter().map(|w| w.text()).collect();
    ///
    /// assert_eq!(standard, ["dog", "cat"]);
    /// assert_eq!(custom, ["bird"]);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut repo = Self::new();
        for line in text.lines() {
            repo.parse_line(line);
        }
        repo
    }

    fn parse_line(&mut self, line: &str) {
        for token in line.split(',').map(str::trim) {
            if token.is_empty() {
                continue;
            }

            let (raw, pool) = match token.strip_suffix(CUSTOM_SUFFIX) {
                Some(stripped) => (stripped, &mut self.custom),
                None => (token, &mut self.standard),
            };

            match Word::new(raw) {
                Ok(word) => pool.push(word),
                Err(e) => log::debug!("Skipping dictionary token '{token}': {e}"),
            }
        }
    }

    /// Fill the standard pool with the fallback list if it is empty
    ///
    /// Custom words are never seeded.
    pub fn seed_defaults_if_empty(&mut self) {
        if !self.standard.is_empty() {
            return;
        }

        self.standard = FALLBACK_WORDS
            .iter()
            .filter_map(|&w| Word::new(w).ok())
            .collect();
        log::info!("Seeded {} fallback words", self.standard.len());
    }

    pub fn add_custom_word(&mut self, word: Word) {
        log::debug!("Adding custom word '{word}'");
        self.custom.push(word);
    }

    /// Draw a word for a new round
    ///
    /// A fair coin picks the custom pool or the standard pool. An empty custom
    /// pool always falls back to the standard pool; the word is then chosen
    /// uniformly from the selected pool.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::EmptyRepository` if both pools are empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word> {
        let choose_custom = rng.random_bool(0.5);

        let pool = if choose_custom && !self.custom.is_empty() {
            &self.custom
        } else if self.standard.is_empty() {
            &self.custom
        } else {
            &self.standard
        };

        pool.choose(rng).ok_or(StorageError::EmptyRepository)
    }

    /// Write the dictionary in its flat file format
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to the sink fails.
    pub fn save<W: Write>(&self, mut sink: W) -> io::Result<()> {
        sink.write_all(self.serialize().as_bytes())?;
        sink.flush()
    }

    /// Standard words as `word,` followed by custom words as `word~,`
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for word in &self.standard {
            out.push_str(word.text());
            out.push(',');
        }
        for word in &self.custom {
            out.push_str(word.text());
            out.push(CUSTOM_SUFFIX);
            out.push(',');
        }
        out
    }

    #[must_use]
    pub fn standard_words(&self) -> &[Word] {
        &self.standard
    }

    #[must_use]
    pub fn custom_words(&self) -> &[Word] {
        &self.custom
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.custom.is_empty()
    }
}
