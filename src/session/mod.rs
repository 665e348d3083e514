//! Interactive session
//!
//! Line-based menus around the round engine and the two repositories.

pub mod app;
pub mod controller;
pub mod input;

pub use app::{open_and_load, run_game, save_all};
pub use controller::{Screen, Session, print_farewell};
pub use input::GuessInput;
