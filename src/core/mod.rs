//! Core domain types for the word game
//!
//! Pure letter arithmetic and rule configuration, no I/O.

mod letters;
mod rules;

pub use letters::{LetterPool, is_constructible};
pub use rules::{
    DEFAULT_LANGUAGE, DEFAULT_ROOT_WORD, EmptyInput, MIN_STRICT_LENGTH, RuleSet, Variant,
    normalize,
};
