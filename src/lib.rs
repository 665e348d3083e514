//! Hangman
//!
//! A terminal word-guessing game with a persisted dictionary and high scores.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Round, Word};
//! use hangman::storage::WordRepository;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut words = WordRepository::parse("dog,cat,bird~,");
//! words.seed_defaults_if_empty();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let target = words.pick_random(&mut rng).unwrap().clone();
//!
//! let mut round = Round::new(target);
//! round.guess_letter('e');
//! println!("{}", round.current_mask());
//! ```

// Core domain types
pub mod core;

// Dictionary and score persistence
pub mod storage;

// Menu state machine
pub mod session;

// Terminal output formatting
pub mod output;

// Command-line configuration
pub mod config;
