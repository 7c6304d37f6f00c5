//! Runtime configuration resolved from the command line

use crate::core::{EmptyInput, RuleSet, Variant};
use std::path::PathBuf;

/// What the input box does with its text after a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Leave the text so the player can fix it
    #[default]
    Keep,
    /// Clear the text
    Clear,
}

impl InputPolicy {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "clear" => Self::Clear,
            _ => Self::Keep,
        }
    }
}

/// Everything needed to set up a game
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub rules: RuleSet,
    pub on_reject: InputPolicy,
    /// Custom root word list; embedded list when `None`
    pub words_path: Option<PathBuf>,
    /// Custom dictionary; embedded list when `None`
    pub dictionary_path: Option<PathBuf>,
}

impl GameConfig {
    /// Build a config from option names as given on the command line
    #[must_use]
    pub fn from_names(variant: &str, empty_input: &str, on_reject: &str) -> Self {
        let rules = RuleSet::new(Variant::from_name(variant))
            .with_empty_input(EmptyInput::from_name(empty_input));

        Self {
            rules,
            on_reject: InputPolicy::from_name(on_reject),
            words_path: None,
            dictionary_path: None,
        }
    }

    #[must_use]
    pub fn with_paths(mut self, words: Option<PathBuf>, dictionary: Option<PathBuf>) -> Self {
        self.words_path = words;
        self.dictionary_path = dictionary;
        self
    }
}
