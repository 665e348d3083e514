//! High-score table
//!
//! Flat file format: `name,guesses,name,guesses,...` on any number of lines.
//! Records are always kept in ranking order so every printer agrees.

use super::decode::read_lossy;
use std::io::{self, Read, Write};

/// One entry in the high-score table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: String,
    pub guesses: u32,
}

/// Name to guess-count records, unique by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreRepository {
    records: Vec<ScoreRecord>,
}

impl ScoreRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a score table from any byte source
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source cannot be read. Malformed guess
    /// counts and invalid UTF-8 are not errors; guesses load as 0 and
    /// undecodable name characters are dropped.
    pub fn load<R: Read>(source: R) -> io::Result<Self> {
        let repo = Self::parse(&read_lossy(source)?);

        log::info!("Loaded {} high scores", repo.records.len());
        Ok(repo)
    }

    /// Parse score text already in memory
    ///
    /// # Examples
    /// ```
    /// use hangman::storage::ScoreRepository;
    ///
    /// let scores = ScoreRepository::parse("al,5,bo,9,cy,9,");
    /// assert_eq!(scores.len(), 3);
    /// assert_eq!(scores.average_guesses(), 8);
    /// assert_eq!(scores.iter().last().unwrap().name, "al");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut repo = Self::new();
        for line in text.lines() {
            repo.parse_line(line);
        }
        repo.sort_descending();
        repo
    }

    fn parse_line(&mut self, line: &str) {
        let mut pending_name: Option<String> = None;

        for token in line.split(',') {
            let token: String = token
                .chars()
                .filter(|&c| !c.is_whitespace() && c != char::REPLACEMENT_CHARACTER)
                .collect();

            match pending_name.take() {
                None if token.is_empty() => {}
                None => pending_name = Some(token),
                Some(name) => {
                    let guesses = token.parse::<u32>().unwrap_or_else(|e| {
                        log::debug!("Score for '{name}' has malformed guesses '{token}': {e}");
                        0
                    });
                    self.upsert(name, guesses);
                }
            }
        }

        if let Some(name) = pending_name {
            log::debug!("Dropping score name '{name}' with no guess count");
        }
    }

    fn upsert(&mut self, name: String, guesses: u32) {
        match self.records.iter_mut().find(|r| r.name == name) {
            Some(record) => record.guesses = guesses,
            None => self.records.push(ScoreRecord { name, guesses }),
        }
    }

    /// Insert or overwrite the score for `name`, then re-rank
    pub fn record_score(&mut self, name: impl Into<String>, guesses: u32) {
        let name = name.into();
        log::debug!("Recording score {guesses} for '{name}'");
        self.upsert(name, guesses);
        self.sort_descending();
    }

    /// Rank records by guesses, highest first
    ///
    /// The sort is stable, so records with equal guesses keep their previous
    /// relative order.
    pub fn sort_descending(&mut self) {
        self.records.sort_by(|a, b| b.guesses.cmp(&a.guesses));
    }

    /// Mean guesses over all records, rounded half up; 0 when empty
    #[must_use]
    pub fn average_guesses(&self) -> u32 {
        if self.records.is_empty() {
            return 0;
        }

        let sum: u64 = self.records.iter().map(|r| u64::from(r.guesses)).sum();
        let mean = sum as f64 / self.records.len() as f64;
        (mean + 0.5).floor() as u32
    }

    pub fn reset(&mut self) {
        log::info!("Clearing {} high scores", self.records.len());
        self.records.clear();
    }

    /// Write the table in its flat file format
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing to the sink fails.
    pub fn save<W: Write>(&self, mut sink: W) -> io::Result<()> {
        sink.write_all(self.serialize().as_bytes())?;
        sink.flush()
    }

    /// Records as `name,guesses,` in ranking order
    #[must_use]
    pub fn serialize(&self) -> String {
        self.records
            .iter()
            .map(|r| format!("{},{},", r.name, r.guesses))
            .collect()
    }

    /// Records in ranking order
    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.guesses)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
