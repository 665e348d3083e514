//! Single round of hangman
//!
//! Tracks the reveal mask, guessed letters, lives and guess count for one target word.

use super::Word;
use rustc_hash::FxHashSet;

/// Lives at the start of every round
pub const STARTING_LIVES: u8 = 8;

/// Mask character for an unrevealed position
pub const PLACEHOLDER: char = '-';

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// What a single guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word; `revealed` positions were uncovered
    Hit { revealed: usize },
    /// The letter is not in the word; one life lost
    Miss,
    /// The letter was tried earlier this round; nothing changed
    AlreadyGuessed,
    /// The round had already been won or lost; nothing changed
    RoundOver,
}

/// State of one hangman round
///
/// # Examples
/// ```
/// use hangman::core::{Round, RoundStatus, Word};
///
/// let mut round = Round::new(Word::new("cat").unwrap());
/// for letter in ['x', 'c', 'a', 't'] {
///     round.guess_letter(letter);
/// }
///
/// assert_eq!(round.status(), RoundStatus::Won);
/// assert_eq!(round.guess_count(), 4);
/// assert_eq!(round.lives(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    letters: Vec<char>,
    mask: Vec<char>,
    guessed: FxHashSet<char>,
    lives: u8,
    guess_count: u32,
    status: RoundStatus,
}

impl Round {
    /// Start a round for the given target word
    #[must_use]
    pub fn new(target: Word) -> Self {
        let letters: Vec<char> = target.text().chars().collect();
        let mask = vec![PLACEHOLDER; letters.len()];

        Self {
            target,
            letters,
            mask,
            guessed: FxHashSet::default(),
            lives: STARTING_LIVES,
            guess_count: 0,
            status: RoundStatus::InProgress,
        }
    }

    /// Guess a single letter
    ///
    /// A letter already tried this round is a no-op. Any other letter counts
    /// as one guess and either reveals every matching position or costs a life.
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.status != RoundStatus::InProgress {
            return GuessOutcome::RoundOver;
        }

        if !self.guessed.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        self.guess_count += 1;

        let mut revealed = 0;
        for (slot, &actual) in self.mask.iter_mut().zip(&self.letters) {
            if actual == letter {
                *slot = letter;
                revealed += 1;
            }
        }

        let outcome = if revealed == 0 {
            self.lives -= 1;
            GuessOutcome::Miss
        } else {
            GuessOutcome::Hit { revealed }
        };

        if self.lives == 0 {
            self.status = RoundStatus::Lost;
        } else if self.mask == self.letters {
            self.status = RoundStatus::Won;
        }

        outcome
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    #[inline]
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.status == RoundStatus::Lost
    }

    /// The reveal mask, e.g. `"ca-"`
    #[must_use]
    pub fn current_mask(&self) -> String {
        self.mask.iter().collect()
    }

    /// Distinct letters tried so far, hits and misses alike
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    #[inline]
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The alphabet with every guessed letter blanked out
    #[must_use]
    pub fn remaining_alphabet(&self) -> String {
        ALPHABET
            .chars()
            .map(|c| if self.guessed.contains(&c) { ' ' } else { c })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Round {
        Round::new(Word::new(word).unwrap())
    }

    #[test]
    fn new_round_is_in_progress() {
        let r = round("cat");
        assert_eq!(r.status(), RoundStatus::InProgress);
        assert_eq!(r.lives(), STARTING_LIVES);
        assert_eq!(r.guess_count(), 0);
        assert_eq!(r.current_mask(), "---");
    }

    #[test]
    fn cat_walkthrough() {
        let mut r = round("cat");

        assert_eq!(r.guess_letter('x'), GuessOutcome::Miss);
        assert_eq!(r.lives(), 7);
        assert_eq!(r.current_mask(), "---");

        assert_eq!(r.guess_letter('c'), GuessOutcome::Hit { revealed: 1 });
        assert_eq!(r.current_mask(), "c--");

        r.guess_letter('a');
        assert_eq!(r.current_mask(), "ca-");
        assert!(!r.is_won());

        r.guess_letter('t');
        assert_eq!(r.current_mask(), "cat");
        assert!(r.is_won());
        assert_eq!(r.guess_count(), 4);
    }

    #[test]
    fn hit_reveals_every_position() {
        let mut r = round("banana");
        assert_eq!(r.guess_letter('a'), GuessOutcome::Hit { revealed: 3 });
        assert_eq!(r.current_mask(), "-a-a-a");
        assert_eq!(r.lives(), STARTING_LIVES);
    }

    #[test]
    fn repeated_guess_is_noop() {
        let mut r = round("cat");
        r.guess_letter('z');
        let lives = r.lives();
        let mask = r.current_mask();

        assert_eq!(r.guess_letter('z'), GuessOutcome::AlreadyGuessed);
        assert_eq!(r.lives(), lives);
        assert_eq!(r.current_mask(), mask);
        assert_eq!(r.guess_count(), 1);

        r.guess_letter('c');
        assert_eq!(r.guess_letter('c'), GuessOutcome::AlreadyGuessed);
        assert_eq!(r.guess_count(), 2);
    }

    #[test]
    fn eight_misses_lose() {
        let mut r = round("cat");
        for (i, letter) in "bdefghij".chars().enumerate() {
            assert!(!r.is_lost(), "lost too early at miss {i}");
            assert_eq!(r.guess_letter(letter), GuessOutcome::Miss);
        }
        assert!(r.is_lost());
        assert_eq!(r.lives(), 0);
        assert_eq!(r.guess_count(), 8);
    }

    #[test]
    fn finished_round_ignores_guesses() {
        let mut r = round("a");
        r.guess_letter('a');
        assert!(r.is_won());

        assert_eq!(r.guess_letter('b'), GuessOutcome::RoundOver);
        assert_eq!(r.lives(), STARTING_LIVES);
        assert_eq!(r.guess_count(), 1);
    }

    #[test]
    fn win_with_lives_to_spare() {
        let mut r = round("bob");
        for letter in "xyzwv".chars() {
            r.guess_letter(letter);
        }
        r.guess_letter('b');
        r.guess_letter('o');
        assert!(r.is_won());
        assert_eq!(r.lives(), 3);
        assert_eq!(r.guess_count(), 7);
    }

    #[test]
    fn non_letter_counts_as_miss() {
        let mut r = round("cat");
        assert_eq!(r.guess_letter('7'), GuessOutcome::Miss);
        assert_eq!(r.lives(), 7);
    }

    #[test]
    fn remaining_alphabet_blanks_guesses() {
        let mut r = round("cat");
        r.guess_letter('a');
        r.guess_letter('z');
        let alphabet = r.remaining_alphabet();
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.starts_with(" bc"));
        assert!(alphabet.ends_with("y "));
        assert_eq!(r.guess_letter('a'), GuessOutcome::AlreadyGuessed);
    }
}
