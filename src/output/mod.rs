//! Terminal output formatting
//!
//! Gallows art, menus and tables for the interactive session.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{
    print_header, print_menu, print_options, print_round, print_scores, print_warning,
    print_word_list,
};
