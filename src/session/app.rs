//! Whole-program flow: load both files, run the menus, save on the way out

use super::controller::{Session, print_farewell};
use crate::output::print_warning;
use crate::storage::{self, GameFiles, ScoreRepository, WordRepository};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Create missing files and read both repositories
///
/// # Errors
///
/// Returns `StorageError::FileAccess` if either file cannot be created,
/// opened or read.
pub fn open_and_load(
    dictionary: &Path,
    scores: &Path,
) -> storage::Result<(GameFiles, WordRepository, ScoreRepository)> {
    let files = GameFiles::open(dictionary, scores)?;
    let words = files.load_words()?;
    let scores = files.load_scores()?;
    Ok((files, words, scores))
}

/// Save both files, reporting each failure as a warning line
///
/// A failed dictionary save does not stop the score save.
///
/// # Errors
///
/// Returns an error only if writing a warning to `out` fails.
pub fn save_all<W: Write>(
    files: &GameFiles,
    words: &WordRepository,
    scores: &ScoreRepository,
    out: &mut W,
) -> io::Result<()> {
    if let Err(e) = files.save_words(words) {
        print_warning(out, &e.to_string())?;
    }
    if let Err(e) = files.save_scores(scores) {
        print_warning(out, &e.to_string())?;
    }
    Ok(())
}

/// Run one game from startup to farewell
///
/// If the files cannot be opened the game exits without playing and
/// without saving. The farewell is printed either way.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_game<R: BufRead, W: Write, G: Rng>(
    dictionary: &Path,
    scores: &Path,
    input: R,
    mut output: W,
    rng: G,
) -> Result<()> {
    match open_and_load(dictionary, scores) {
        Ok((files, mut words, mut scores)) => {
            words.seed_defaults_if_empty();

            Session::new(&mut words, &mut scores, input, &mut output, rng).run()?;

            save_all(&files, &words, &scores, &mut output)?;
        }
        Err(e) => {
            log::error!("Startup failed: {e}");
            writeln!(output, "Something is wrong. {e}.")?;
            writeln!(output, "Exiting without playing; nothing will be saved.")?;
        }
    }

    print_farewell(&mut output)?;
    Ok(())
}
