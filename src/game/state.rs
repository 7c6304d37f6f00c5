//! Game state controller
//!
//! Owns the root word, the words played this round and the score. State only
//! changes through [`Game::start_round`] and accepted submissions.

use crate::core::{DEFAULT_ROOT_WORD, RuleSet, normalize};
use crate::validator::{Alert, Dictionary, Rejection, Validator};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Where the game is between events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    /// A rejection is on screen until acknowledged
    ShowingError(Alert),
}

/// Result of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted { word: String, points: usize },
    Rejected { rejection: Rejection, alert: Alert },
    /// Empty input dropped without an alert
    Ignored,
}

impl Submission {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected { rejection, .. } => Some(*rejection),
            _ => None,
        }
    }
}

/// A single-player word game
pub struct Game<D: Dictionary> {
    validator: Validator<D>,
    root: String,
    used: Vec<String>,
    score: usize,
    phase: Phase,
    used_fallback: bool,
}

impl<D: Dictionary> Game<D> {
    /// Create a game whose first round uses the default root word
    ///
    /// Call [`Game::start_round`] to pick a real one.
    pub fn new(rules: RuleSet, dictionary: D) -> Self {
        Self {
            validator: Validator::new(rules, dictionary),
            root: DEFAULT_ROOT_WORD.to_string(),
            used: Vec::new(),
            score: 0,
            phase: Phase::AwaitingInput,
            used_fallback: false,
        }
    }

    /// Start a new round with a random root word from `words`
    ///
    /// Falls back to the default root word when `words` is empty; check
    /// [`Game::used_fallback`] afterwards to tell the player.
    pub fn start_round<R: Rng + ?Sized>(&mut self, words: &[String], rng: &mut R) -> &str {
        let picked = words.choose(rng).cloned();
        let fell_back = picked.is_none();
        let root = picked.unwrap_or_else(|| DEFAULT_ROOT_WORD.to_string());

        self.start_round_with(&root);
        self.used_fallback = fell_back;
        &self.root
    }

    /// Start a new round with a specific root word
    pub fn start_round_with(&mut self, root: &str) -> &str {
        self.root = normalize(root);
        self.used.clear();
        self.score = 0;
        self.phase = Phase::AwaitingInput;
        self.used_fallback = false;
        tracing::info!(root = %self.root, "new round");
        &self.root
    }

    /// Submit a candidate word
    ///
    /// Accepted words go to the front of the used list and add their length to
    /// the score. Rejections leave the round untouched and raise an alert.
    pub fn submit(&mut self, candidate: &str) -> Submission {
        match self.validator.validate(candidate, &self.root, &self.used) {
            Ok(accepted) => {
                let points = accepted.points();
                tracing::debug!(word = %accepted.word, points, "accepted");
                self.used.insert(0, accepted.word.clone());
                self.score += points;
                self.phase = Phase::AwaitingInput;
                Submission::Accepted {
                    word: accepted.word,
                    points,
                }
            }
            Err(rejection) if rejection.is_silent() => Submission::Ignored,
            Err(rejection) => {
                tracing::debug!(candidate, %rejection, "rejected");
                let alert = rejection.alert(&self.root);
                self.phase = Phase::ShowingError(alert.clone());
                Submission::Rejected { rejection, alert }
            }
        }
    }

    /// Dismiss the current alert, if any
    pub fn acknowledge(&mut self) {
        self.phase = Phase::AwaitingInput;
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Words played this round, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The alert currently on screen
    #[must_use]
    pub const fn alert(&self) -> Option<&Alert> {
        match &self.phase {
            Phase::ShowingError(alert) => Some(alert),
            Phase::AwaitingInput => None,
        }
    }

    /// Whether the current round runs on the default root word because the
    /// word list was empty
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        self.validator.rules()
    }

    #[must_use]
    pub const fn validator(&self) -> &Validator<D> {
        &self.validator
    }
}
