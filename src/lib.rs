//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::RuleSet;
//! use word_scramble::game::{Game, Submission};
//! use word_scramble::validator::WordSet;
//!
//! let mut game = Game::new(RuleSet::default(), WordSet::new("en", ["fist", "wits"]));
//! game.start_round_with("swift");
//!
//! assert!(matches!(game.submit("fist"), Submission::Accepted { points: 4, .. }));
//! assert_eq!(game.score(), 4);
//! ```

// Core domain types
pub mod core;

// Word validation pipeline
pub mod validator;

// Round and score state
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::GameError;
