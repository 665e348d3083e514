//! Core domain types for hangman
//!
//! This module contains the word type and the per-round state machine.
//! Nothing here touches the terminal or the filesystem.

mod round;
mod word;

pub use round::{GuessOutcome, PLACEHOLDER, Round, RoundStatus, STARTING_LIVES};
pub use word::{Word, WordError};
