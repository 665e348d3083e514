//! Display functions for menus, rounds and tables
//!
//! Everything writes to a caller-supplied sink so the session can be driven
//! against stdout or an in-memory buffer.

use super::formatters::{lives_label, score_row, spaced};
use super::gallows;
use crate::core::{Round, Word};
use crate::storage::ScoreRepository;
use colored::Colorize;
use std::io::{self, Write};

/// Print a section header
pub fn print_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "--".bright_black())?;
    writeln!(out, "{}", title.bright_cyan().bold())?;
    writeln!(out, "{}", "--".bright_black())
}

/// Print a numbered menu followed by the option prompt
pub fn print_menu<W: Write>(out: &mut W, title: &str, options: &[(&str, &str)]) -> io::Result<()> {
    print_header(out, title)?;
    print_options(out, options)?;
    write!(out, "Choose an option: ")?;
    out.flush()
}

/// Print `key. label` lines with no header or prompt
pub fn print_options<W: Write>(out: &mut W, options: &[(&str, &str)]) -> io::Result<()> {
    for (key, label) in options {
        writeln!(out, "{}. {label}", key.bright_yellow())?;
    }
    out.flush()
}

/// Print the gallows, unused letters, mask and lives for a round
pub fn print_round<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    if let Some(rows) = gallows::frame(round.lives()) {
        for row in rows {
            writeln!(out, "{}", row.red())?;
        }
    }

    writeln!(out, "{}", round.remaining_alphabet().bright_black())?;
    writeln!(
        out,
        "Your word: {}",
        spaced(&round.current_mask()).bright_white().bold()
    )?;

    let lives = lives_label(round.lives());
    let lives = if round.lives() <= 2 {
        lives.red().bold()
    } else {
        lives.normal()
    };
    writeln!(out, "You have {lives} left.")?;

    if round.is_lost() {
        writeln!(out, "{}", "Game over.".red().bold())?;
    }
    Ok(())
}

/// Print the ranked high-score table
pub fn print_scores<W: Write>(out: &mut W, scores: &ScoreRepository) -> io::Result<()> {
    if scores.is_empty() {
        return writeln!(out, "High-scores are empty.");
    }

    for record in scores.iter() {
        writeln!(out, "{}", score_row(&record.name, record.guesses))?;
    }
    Ok(())
}

/// Print one of the word pools under a counted header
pub fn print_word_list<W: Write>(out: &mut W, label: &str, words: &[Word]) -> io::Result<()> {
    print_header(out, &format!("{label} word list ({} words)", words.len()))?;

    if words.is_empty() {
        return writeln!(out, "{label} word list empty.");
    }

    for word in words {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Print a warning line
pub fn print_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", "Warning:".yellow().bold())
}
