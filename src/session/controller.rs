//! Menu-driven game session
//!
//! A small state machine: each screen reads what it needs from the input,
//! acts on the repositories and returns the next screen.

use super::input::{GuessInput, is_yes, menu_choice, parse_guess, parse_new_word, sanitize_name};
use crate::core::{GuessOutcome, Round};
use crate::output::formatters::guesses_label;
use crate::output::{
    print_header, print_menu, print_options, print_round, print_scores, print_word_list,
};
use crate::storage::{ScoreRepository, WordRepository};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Screens of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Playing,
    Dictionary,
    RoundEnd,
    ScoreView,
    Exit,
}

/// Interactive session over a line source and an output sink
///
/// The repositories are borrowed for the whole session; the caller loads them
/// before and saves them after [`Session::run`].
pub struct Session<'a, R, W, G> {
    words: &'a mut WordRepository,
    scores: &'a mut ScoreRepository,
    input: R,
    output: W,
    rng: G,
    round: Option<Round>,
}

impl<'a, R: BufRead, W: Write, G: Rng> Session<'a, R, W, G> {
    pub fn new(
        words: &'a mut WordRepository,
        scores: &'a mut ScoreRepository,
        input: R,
        output: W,
        rng: G,
    ) -> Self {
        Self {
            words,
            scores,
            input,
            output,
            rng,
            round: None,
        }
    }

    /// Drive the state machine from the main menu until `Exit`
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the input or writing to the output fails.
    pub fn run(&mut self) -> Result<()> {
        let mut screen = Screen::MainMenu;
        while screen != Screen::Exit {
            log::debug!("Entering {screen:?}");
            screen = self.step(screen)?;
        }
        Ok(())
    }

    /// Run one screen and return the next one
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the input or writing to the output fails.
    pub fn step(&mut self, screen: Screen) -> Result<Screen> {
        match screen {
            Screen::MainMenu => self.main_menu(),
            Screen::Playing => self.play_round(),
            Screen::Dictionary => self.dictionary(),
            Screen::RoundEnd => self.round_end(),
            Screen::ScoreView => self.score_view(),
            Screen::Exit => Ok(Screen::Exit),
        }
    }

    /// Consume the session, handing back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn main_menu(&mut self) -> Result<Screen> {
        print_menu(
            &mut self.output,
            "Hangman",
            &[
                ("1", "Play game"),
                ("2", "High-Scores"),
                ("3", "Dictionary"),
                ("X", "Exit"),
            ],
        )?;

        let Some(line) = self.read_line()? else {
            return Ok(Screen::Exit);
        };

        Ok(match menu_choice(&line) {
            Some('1') => Screen::Playing,
            Some('2') => Screen::ScoreView,
            Some('3') => Screen::Dictionary,
            Some('x') => Screen::Exit,
            _ => Screen::MainMenu,
        })
    }

    fn play_round(&mut self) -> Result<Screen> {
        let target = match self.words.pick_random(&mut self.rng) {
            Ok(word) => word.clone(),
            Err(e) => {
                log::error!("Cannot start a round: {e}");
                writeln!(self.output, "{} {e}", "Error:".red().bold())?;
                return Ok(Screen::Exit);
            }
        };
        log::debug!(
            "New round with a {}-letter word",
            target.text().chars().count()
        );

        let round = self.round.insert(Round::new(target));
        print_round(&mut self.output, round)?;
        let mut prompt = "Guess a letter. Type exit to the menu: ";

        loop {
            let Some(line) = self.prompt(prompt)? else {
                self.round = None;
                return Ok(Screen::Exit);
            };
            prompt = "Guess a letter: ";

            let letter = match parse_guess(&line) {
                GuessInput::Letter(c) => c,
                GuessInput::Exit => {
                    self.round = None;
                    return Ok(Screen::MainMenu);
                }
                GuessInput::Empty => {
                    writeln!(self.output, "Please type a letter.")?;
                    continue;
                }
                GuessInput::NotALetter(c) => {
                    writeln!(self.output, "'{c}' is not a letter.")?;
                    continue;
                }
            };

            let Some(round) = self.round.as_mut() else {
                return Ok(Screen::MainMenu);
            };

            if round.guess_letter(letter) == GuessOutcome::AlreadyGuessed {
                writeln!(self.output, "You already tried '{letter}'.")?;
            }
            print_round(&mut self.output, round)?;

            if round.is_won() || round.is_lost() {
                return Ok(Screen::RoundEnd);
            }
        }
    }

    fn round_end(&mut self) -> Result<Screen> {
        let Some(round) = self.round.take() else {
            return Ok(Screen::MainMenu);
        };

        print_header(&mut self.output, "Game over")?;

        if !round.is_won() {
            writeln!(
                self.output,
                "{} The word was: {}",
                "Unlucky.".red().bold(),
                round.target().text().bold()
            )?;
            writeln!(self.output, "Try another game!")?;
            return Ok(Screen::MainMenu);
        }

        let guesses = round.guess_count();
        writeln!(
            self.output,
            "{} The word was: {}",
            "Congratulations you won!".green().bold(),
            round.target().text().bold()
        )?;
        writeln!(self.output, "You took {}.", guesses_label(guesses))?;

        if self.scores.is_empty() {
            writeln!(self.output, "There are no saved scores to compare against yet.")?;
        } else {
            let average = self.scores.average_guesses();
            let verdict = if guesses < average {
                "better than"
            } else {
                "lower than"
            };
            writeln!(
                self.output,
                "You scored {verdict} average. The average is {}.",
                guesses_label(average)
            )?;
        }

        let Some(answer) = self.prompt("Would you like to save your score? yes/no: ")? else {
            return Ok(Screen::Exit);
        };
        if !is_yes(&answer) {
            return Ok(Screen::MainMenu);
        }

        loop {
            let Some(line) = self.prompt("Please enter your name: ")? else {
                return Ok(Screen::Exit);
            };
            match sanitize_name(&line) {
                Some(name) => {
                    self.scores.record_score(name.clone(), guesses);
                    writeln!(self.output, "Saved {} for {name}.", guesses_label(guesses))?;
                    return Ok(Screen::MainMenu);
                }
                None => writeln!(
                    self.output,
                    "A name needs at least one character other than spaces and commas."
                )?,
            }
        }
    }

    fn score_view(&mut self) -> Result<Screen> {
        print_header(&mut self.output, "High Scores")?;
        print_scores(&mut self.output, self.scores)?;
        writeln!(self.output, "{}", "--".bright_black())?;
        print_options(
            &mut self.output,
            &[("1", "Reset all scores"), ("x", "Go back to the main menu")],
        )?;

        let Some(line) = self.read_line()? else {
            return Ok(Screen::Exit);
        };

        if menu_choice(&line) == Some('1') {
            self.scores.reset();
            writeln!(self.output, "All scores have been reset.")?;
        }
        Ok(Screen::MainMenu)
    }

    fn dictionary(&mut self) -> Result<Screen> {
        loop {
            print_menu(
                &mut self.output,
                "Dictionary",
                &[
                    ("1", "View standard words"),
                    ("2", "View custom words"),
                    ("3", "Add a word"),
                    ("x", "Back to the main menu"),
                ],
            )?;

            let Some(line) = self.read_line()? else {
                return Ok(Screen::Exit);
            };

            match menu_choice(&line) {
                Some('1') => {
                    print_word_list(&mut self.output, "Standard", self.words.standard_words())?;
                }
                Some('2') => {
                    print_word_list(&mut self.output, "Custom", self.words.custom_words())?;
                }
                Some('3') => {
                    if !self.add_word()? {
                        return Ok(Screen::Exit);
                    }
                }
                Some('x') => return Ok(Screen::MainMenu),
                _ => {}
            }
        }
    }

    /// Prompt until a valid word is typed; false if the input closed first
    fn add_word(&mut self) -> Result<bool> {
        loop {
            let Some(line) = self.prompt("Type a new word: ")? else {
                return Ok(false);
            };
            match parse_new_word(&line) {
                Ok(word) => {
                    writeln!(self.output, "Added '{word}' to the custom word list.")?;
                    self.words.add_custom_word(word);
                    return Ok(true);
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

/// Closing line printed on every exit path
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_farewell<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "--")?;
    writeln!(out, "Thanks for playing")
}
