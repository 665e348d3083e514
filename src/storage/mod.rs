//! Persisted word lists and high scores
//!
//! Both stores use a comma-delimited flat text format and are loaded once at
//! startup and saved once at shutdown.

mod decode;
mod embedded;
mod error;
pub mod files;
pub mod scores;
pub mod words;

pub use embedded::FALLBACK_WORDS;
pub use error::{Result, StorageError};
pub use files::GameFiles;
pub use scores::{ScoreRecord, ScoreRepository};
pub use words::WordRepository;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn fallback_words_are_valid() {
        assert!(FALLBACK_WORDS.len() >= 8);
        for &word in FALLBACK_WORDS {
            assert!(Word::new(word).is_ok(), "Fallback word '{word}' is invalid");
        }
    }
}
