//! Hangman - CLI
//!
//! Loads the dictionary and high scores, runs the menu session on the
//! terminal, and saves both files on the way out.

use anyhow::Result;
use clap::Parser;
use hangman::{config::GameConfig, session::run_game};
use std::io;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = GameConfig::parse();
    log::debug!("Starting with {config:?}");

    run_game(
        &config.dictionary,
        &config.scores,
        io::stdin().lock(),
        io::stdout().lock(),
        config.rng(),
    )
}
