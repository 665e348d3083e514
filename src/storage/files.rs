//! On-disk locations of the dictionary and score files
//!
//! Both files are created empty if absent, read once at startup and written
//! once at shutdown.

use super::error::{Result, StorageError};
use super::{ScoreRepository, WordRepository};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Default dictionary file name, relative to the working directory
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

/// Default high-score file name, relative to the working directory
pub const DEFAULT_SCORES_PATH: &str = "highscores.txt";

/// The two persisted files of a game session
#[derive(Debug, Clone)]
pub struct GameFiles {
    dictionary: PathBuf,
    scores: PathBuf,
}

impl GameFiles {
    /// Make sure both files exist, creating empty ones where needed
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileAccess` naming the first file that could not
    /// be opened or created.
    pub fn open(dictionary: impl Into<PathBuf>, scores: impl Into<PathBuf>) -> Result<Self> {
        let files = Self {
            dictionary: dictionary.into(),
            scores: scores.into(),
        };

        ensure_exists(&files.dictionary)?;
        ensure_exists(&files.scores)?;

        Ok(files)
    }

    #[must_use]
    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary
    }

    #[must_use]
    pub fn scores_path(&self) -> &Path {
        &self.scores
    }

    /// Read the dictionary file
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileAccess` if the file cannot be opened or read.
    pub fn load_words(&self) -> Result<WordRepository> {
        let file = open_for_read(&self.dictionary)?;
        WordRepository::load(file).map_err(|source| StorageError::FileAccess {
            path: self.dictionary.clone(),
            source,
        })
    }

    /// Read the score file
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileAccess` if the file cannot be opened or read.
    pub fn load_scores(&self) -> Result<ScoreRepository> {
        let file = open_for_read(&self.scores)?;
        ScoreRepository::load(file).map_err(|source| StorageError::FileAccess {
            path: self.scores.clone(),
            source,
        })
    }

    /// Overwrite the dictionary file
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Save` if the file cannot be written.
    pub fn save_words(&self, words: &WordRepository) -> Result<()> {
        write_file(&self.dictionary, &words.serialize())?;
        log::info!(
            "Saved {} standard and {} custom words to {}",
            words.standard_words().len(),
            words.custom_words().len(),
            self.dictionary.display()
        );
        Ok(())
    }

    /// Overwrite the score file
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Save` if the file cannot be written.
    pub fn save_scores(&self, scores: &ScoreRepository) -> Result<()> {
        write_file(&self.scores, &scores.serialize())?;
        log::info!("Saved {} high scores to {}", scores.len(), self.scores.display());
        Ok(())
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|source| {
            log::warn!("Cannot open or create {}: {source}", path.display());
            StorageError::FileAccess {
                path: path.to_path_buf(),
                source,
            }
        })
}

fn open_for_read(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| StorageError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| {
        log::warn!("Unable to save {}: {source}", path.display());
        StorageError::Save {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use tempfile::TempDir;

    fn open_in(dir: &TempDir) -> GameFiles {
        GameFiles::open(dir.path().join("dictionary.txt"), dir.path().join("highscores.txt"))
            .unwrap()
    }

    #[test]
    fn open_creates_missing_files() {
        let dir = TempDir::new().unwrap();
        let files = open_in(&dir);

        assert!(files.dictionary_path().exists());
        assert!(files.scores_path().exists());
        assert!(files.load_words().unwrap().is_empty());
        assert!(files.load_scores().unwrap().is_empty());
    }

    #[test]
    fn open_keeps_existing_contents() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dictionary.txt"), "dog,bird~,").unwrap();
        fs::write(dir.path().join("highscores.txt"), "al,5,").unwrap();

        let files = open_in(&dir);
        assert_eq!(files.load_words().unwrap().serialize(), "dog,bird~,");
        assert_eq!(files.load_scores().unwrap().get("al"), Some(5));
    }

    #[test]
    fn open_fails_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope").join("dictionary.txt");

        let err = GameFiles::open(missing, dir.path().join("highscores.txt")).unwrap_err();
        assert!(matches!(err, StorageError::FileAccess { .. }));
    }

    #[test]
    fn load_tolerates_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dictionary.txt"), b"dog,caf\xe9,cat,").unwrap();
        fs::write(dir.path().join("highscores.txt"), b"al,5,b\xf6b,3,").unwrap();

        let files = open_in(&dir);
        let words = files.load_words().unwrap();
        let standard: Vec<&str> = words.standard_words().iter().map(Word::text).collect();
        assert_eq!(standard, ["dog", "cat"]);

        let scores = files.load_scores().unwrap();
        assert_eq!(scores.get("al"), Some(5));
        assert_eq!(scores.get("bb"), Some(3));
    }

    #[test]
    fn save_to_directory_is_save_error() {
        let dir = TempDir::new().unwrap();
        let files = open_in(&dir);
        fs::remove_file(files.scores_path()).unwrap();
        fs::create_dir(files.scores_path()).unwrap();

        let err = files.save_scores(&ScoreRepository::parse("al,5")).unwrap_err();
        assert!(matches!(err, StorageError::Save { .. }));
        assert!(err.to_string().starts_with("unable to save"));
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let files = open_in(&dir);

        let mut words = WordRepository::parse("dog,cat");
        words.add_custom_word(Word::new("emu").unwrap());
        let mut scores = ScoreRepository::new();
        scores.record_score("al", 5);
        scores.record_score("bo", 9);

        files.save_words(&words).unwrap();
        files.save_scores(&scores).unwrap();

        assert_eq!(files.load_words().unwrap(), words);
        assert_eq!(files.load_scores().unwrap(), scores);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let files = open_in(&dir);

        files.save_scores(&ScoreRepository::parse("al,5,bo,9")).unwrap();
        files.save_scores(&ScoreRepository::new()).unwrap();

        assert_eq!(fs::read_to_string(files.scores_path()).unwrap(), "");
    }
}
