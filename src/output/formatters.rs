//! Formatting utilities for terminal output

/// Width of the name column in the score table
pub const NAME_COLUMN: usize = 16;

/// Format one row of the score table
#[must_use]
pub fn score_row(name: &str, guesses: u32) -> String {
    format!("{name:<width$}{guesses}", width = NAME_COLUMN)
}

/// "1 life" / "3 lives"
#[must_use]
pub fn lives_label(lives: u8) -> String {
    if lives == 1 {
        "1 life".to_string()
    } else {
        format!("{lives} lives")
    }
}

/// "1 guess" / "4 guesses"
#[must_use]
pub fn guesses_label(guesses: u32) -> String {
    if guesses == 1 {
        "1 guess".to_string()
    } else {
        format!("{guesses} guesses")
    }
}

/// Spread a mask out so each position is easy to count
#[must_use]
pub fn spaced(mask: &str) -> String {
    let mut out = String::with_capacity(mask.len() * 2);
    for (i, c) in mask.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
