//! Word validation pipeline
//!
//! Checks run in a fixed order and stop at the first failure:
//! originality, length/identity (strict only), constructibility, dictionary.

use super::dictionary::Dictionary;
use super::rejection::Rejection;
use crate::core::{EmptyInput, LetterPool, MIN_STRICT_LENGTH, RuleSet, normalize};

/// A candidate that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
}

impl Accepted {
    /// Points the word is worth: one per character
    #[inline]
    #[must_use]
    pub fn points(&self) -> usize {
        self.word.chars().count()
    }
}

/// Validates candidates against a root word and the words already played
pub struct Validator<D: Dictionary> {
    rules: RuleSet,
    dictionary: D,
}

impl<D: Dictionary> Validator<D> {
    pub const fn new(rules: RuleSet, dictionary: D) -> Self {
        Self { rules, dictionary }
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Validate a raw candidate
    ///
    /// The candidate is normalized first; `used` is expected to hold
    /// normalized words.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] the candidate runs into.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RuleSet;
    /// use word_scramble::validator::{Rejection, Validator, WordSet};
    ///
    /// let validator = Validator::new(RuleSet::default(), WordSet::new("en", ["fist"]));
    /// let accepted = validator.validate(" FIST ", "swift", &[]).unwrap();
    /// assert_eq!(accepted.word, "fist");
    ///
    /// let used = vec!["fist".to_string()];
    /// assert_eq!(validator.validate("fist", "swift", &used), Err(Rejection::AlreadyUsed));
    /// ```
    pub fn validate(
        &self,
        candidate: &str,
        root: &str,
        used: &[String],
    ) -> Result<Accepted, Rejection> {
        let word = normalize(candidate);

        if word.is_empty() && self.rules.empty_input == EmptyInput::Ignore {
            return Err(Rejection::Empty);
        }

        if !is_original(&word, used) {
            return Err(Rejection::AlreadyUsed);
        }

        if self.rules.guards_length() && !passes_length_guard(&word, root) {
            return Err(Rejection::NotPossible);
        }

        if !LetterPool::new(root).can_spell(&word) {
            return Err(Rejection::NotPossible);
        }

        if !self.dictionary.is_recognized(&word, &self.rules.language) {
            return Err(Rejection::NotRecognized);
        }

        Ok(Accepted { word })
    }
}

fn is_original(word: &str, used: &[String]) -> bool {
    !used.iter().any(|w| w == word)
}

/// At least three characters, and not the root word itself
fn passes_length_guard(word: &str, root: &str) -> bool {
    word.chars().count() >= MIN_STRICT_LENGTH && word != root
}
