//! Check command
//!
//! Plays a list of words against a fixed root word, as one round.

use crate::game::{Game, Submission};
use crate::validator::Dictionary;

/// Result of checking a list of words
pub struct CheckResult {
    pub root: String,
    pub outcomes: Vec<(String, Submission)>,
    pub score: usize,
    pub used_words: Vec<String>,
}

impl CheckResult {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, s)| s.is_accepted()).count()
    }
}

/// Submit every word in order against `root`
///
/// Alerts are acknowledged immediately so later words are still checked.
pub fn check_words<D: Dictionary>(game: &mut Game<D>, root: &str, words: &[String]) -> CheckResult {
    game.start_round_with(root);

    let outcomes = words
        .iter()
        .map(|word| {
            let outcome = game.submit(word);
            game.acknowledge();
            (word.clone(), outcome)
        })
        .collect();

    CheckResult {
        root: game.root().to_string(),
        outcomes,
        score: game.score(),
        used_words: game.used_words().to_vec(),
    }
}
