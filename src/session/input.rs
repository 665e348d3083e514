//! Parsing of raw console lines
//!
//! Turns what the player typed into menu choices, guesses and names.

use crate::core::{Word, WordError};

/// Command that abandons the active round
pub const EXIT_COMMAND: &str = "exit";

/// What the player typed while a round is in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    Letter(char),
    Exit,
    Empty,
    NotALetter(char),
}

/// First character of the line, lowercased; `None` for a blank line
#[must_use]
pub fn menu_choice(line: &str) -> Option<char> {
    line.trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
}

/// Interpret a line typed during a round
///
/// Only the first character counts as the guess, so `"cat"` guesses `c`.
#[must_use]
pub fn parse_guess(line: &str) -> GuessInput {
    let line = line.trim().to_lowercase();

    if line == EXIT_COMMAND {
        return GuessInput::Exit;
    }

    match line.chars().next() {
        None => GuessInput::Empty,
        Some(c) if c.is_alphabetic() => GuessInput::Letter(c),
        Some(c) => GuessInput::NotALetter(c),
    }
}

/// Validate a word the player wants to add to the dictionary
///
/// # Errors
///
/// Returns `WordError` if the trimmed line is empty or has non-letters.
pub fn parse_new_word(line: &str) -> Result<Word, WordError> {
    Word::new(line.trim())
}

/// Strip the characters the score file reserves
///
/// Returns `None` if nothing usable is left.
#[must_use]
pub fn sanitize_name(line: &str) -> Option<String> {
    let name: String = line
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    (!name.is_empty()).then_some(name)
}

/// Whether the player answered yes
#[must_use]
pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choice_first_char() {
        assert_eq!(menu_choice("1\n"), Some('1'));
        assert_eq!(menu_choice("  X"), Some('x'));
        assert_eq!(menu_choice("3 please"), Some('3'));
        assert_eq!(menu_choice("   "), None);
        assert_eq!(menu_choice(""), None);
    }

    #[test]
    fn parse_guess_variants() {
        assert_eq!(parse_guess("a"), GuessInput::Letter('a'));
        assert_eq!(parse_guess("Q\n"), GuessInput::Letter('q'));
        assert_eq!(parse_guess("cat"), GuessInput::Letter('c'));
        assert_eq!(parse_guess("EXIT"), GuessInput::Exit);
        assert_eq!(parse_guess(" exit "), GuessInput::Exit);
        assert_eq!(parse_guess(""), GuessInput::Empty);
        assert_eq!(parse_guess("7"), GuessInput::NotALetter('7'));
    }

    #[test]
    fn exit_prefix_is_a_letter() {
        assert_eq!(parse_guess("exits"), GuessInput::Letter('e'));
    }

    #[test]
    fn parse_new_word_validates() {
        assert_eq!(parse_new_word(" Otter \n").unwrap().text(), "otter");
        assert!(parse_new_word("").is_err());
        assert!(parse_new_word("two words").is_err());
    }

    #[test]
    fn sanitize_name_strips_reserved() {
        assert_eq!(sanitize_name("Ada Lovelace"), Some("AdaLovelace".to_string()));
        assert_eq!(sanitize_name("a,b"), Some("ab".to_string()));
        assert_eq!(sanitize_name(" , "), None);
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("yes"));
        assert!(is_yes(" Y "));
        assert!(!is_yes("no"));
        assert!(!is_yes(""));
    }
}
