// Property tests for the round engine and the two flat-file stores

use hangman::core::{GuessOutcome, Round, STARTING_LIVES, Word};
use hangman::storage::{ScoreRepository, WordRepository};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

fn guesses_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'z'), 0..60)
}

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

fn texts(words: &[Word]) -> Vec<String> {
    words.iter().map(|w| w.text().to_string()).collect()
}

proptest! {
    #[test]
    fn guess_count_is_distinct_letters(target in word_strategy(), guesses in guesses_strategy()) {
        let mut round = Round::new(Word::new(target).unwrap());
        let mut distinct = HashSet::new();

        for letter in guesses {
            if round.is_won() || round.is_lost() {
                break;
            }
            distinct.insert(letter);
            round.guess_letter(letter);
        }

        prop_assert_eq!(round.guess_count() as usize, distinct.len());
        prop_assert!(round.guess_count() <= 26);
    }

    #[test]
    fn repeated_guess_changes_nothing(target in word_strategy(), guesses in guesses_strategy()) {
        let mut round = Round::new(Word::new(target).unwrap());

        for letter in guesses {
            let first = round.guess_letter(letter);
            let lives = round.lives();
            let mask = round.current_mask();
            let count = round.guess_count();

            let second = round.guess_letter(letter);
            if first != GuessOutcome::RoundOver {
                prop_assert!(matches!(second, GuessOutcome::AlreadyGuessed | GuessOutcome::RoundOver));
            }
            prop_assert_eq!(round.lives(), lives);
            prop_assert_eq!(round.current_mask(), mask);
            prop_assert_eq!(round.guess_count(), count);
        }
    }

    #[test]
    fn won_and_lost_match_their_conditions(target in word_strategy(), guesses in guesses_strategy()) {
        let mut round = Round::new(Word::new(target.clone()).unwrap());

        for letter in guesses {
            round.guess_letter(letter);
            prop_assert_eq!(round.is_lost(), round.lives() == 0);
            prop_assert_eq!(round.is_won(), round.current_mask() == target);
            prop_assert!(!(round.is_won() && round.is_lost()));
            prop_assert!(round.lives() <= STARTING_LIVES);
        }
    }

    #[test]
    fn dictionary_round_trip(
        standard in prop::collection::vec(word_strategy(), 0..20),
        custom in prop::collection::vec(word_strategy(), 0..20),
    ) {
        let mut repo = WordRepository::parse(&standard.join(","));
        for w in &custom {
            repo.add_custom_word(Word::new(w.as_str()).unwrap());
        }

        let reloaded = WordRepository::parse(&repo.serialize());
        prop_assert_eq!(sorted(texts(reloaded.standard_words())), sorted(standard));
        prop_assert_eq!(sorted(texts(reloaded.custom_words())), sorted(custom));
    }

    #[test]
    fn scores_round_trip(entries in prop::collection::vec(("[A-Za-z0-9_]{1,10}", 0u32..500), 0..30)) {
        let mut repo = ScoreRepository::new();
        let mut expected = BTreeMap::new();
        for (name, guesses) in &entries {
            repo.record_score(name.clone(), *guesses);
            expected.insert(name.clone(), *guesses);
        }

        let reloaded = ScoreRepository::parse(&repo.serialize());
        let actual: BTreeMap<String, u32> =
            reloaded.iter().map(|r| (r.name.clone(), r.guesses)).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn scores_are_never_ascending(entries in prop::collection::vec(("[a-z]{1,6}", 0u32..30), 0..30)) {
        let mut repo = ScoreRepository::new();
        for (name, guesses) in entries {
            repo.record_score(name, guesses);
        }

        let ranked: Vec<u32> = repo.iter().map(|r| r.guesses).collect();
        prop_assert!(ranked.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

#[test]
fn ten_ranks_before_five() {
    let mut repo = ScoreRepository::parse("a,5,b,10,c,5,d,10");
    repo.record_score("e", 5);

    let ranked: Vec<u32> = repo.iter().map(|r| r.guesses).collect();
    assert_eq!(ranked, [10, 10, 5, 5, 5]);
}
