//! Hangman word representation
//!
//! A Word is a non-empty run of alphabetic characters, normalized to lowercase.

use std::fmt;
use thiserror::Error;

/// A playable word
///
/// Guaranteed non-empty, alphabetic-only and lowercase, so the round engine
/// and the dictionary file never see anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only letters, found '{0}'")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty or contains anything other
    /// than alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Gallows").unwrap();
    /// assert_eq!(word.text(), "gallows");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
