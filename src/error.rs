//! Library error type

use std::fmt;
use std::path::PathBuf;

/// Recoverable failures outside of word validation
#[derive(Debug)]
pub enum GameError {
    /// A word list file could not be read
    ResourceUnavailable { path: PathBuf, source: std::io::Error },
    /// A word list file was read but held no usable words
    EmptyWordList { path: PathBuf },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceUnavailable { path, source } => {
                write!(f, "Could not load word list {}: {source}", path.display())
            }
            Self::EmptyWordList { path } => {
                write!(f, "Word list {} contains no words", path.display())
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceUnavailable { source, .. } => Some(source),
            Self::EmptyWordList { .. } => None,
        }
    }
}
