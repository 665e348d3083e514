//! Command-line configuration
//!
//! The game needs no arguments; flags only move the data files or fix the seed.

use crate::storage::files::{DEFAULT_DICTIONARY_PATH, DEFAULT_SCORES_PATH};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "hangman",
    about = "Terminal hangman with a persisted dictionary and high scores",
    version,
    author
)]
pub struct GameConfig {
    /// Dictionary file (comma-separated words, custom words end in '~')
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    pub dictionary: PathBuf,

    /// High-score file (comma-separated name,guesses pairs)
    #[arg(short, long, default_value = DEFAULT_SCORES_PATH)]
    pub scores: PathBuf,

    /// Seed for word selection, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Random source for word selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
