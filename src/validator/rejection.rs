//! Rejection kinds and the alerts shown for them

use std::fmt;

/// Why a candidate was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Nothing left after trimming; never surfaced to the player
    Empty,
    /// Already played this round
    AlreadyUsed,
    /// Can't be spelled from the root word, too short, or is the root word
    NotPossible,
    /// Not in the dictionary
    NotRecognized,
}

impl Rejection {
    /// Whether this rejection should be shown to the player
    #[inline]
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Empty => "Nothing entered",
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::NotRecognized => "Word not recognized",
        }
    }

    /// Player-facing explanation, mentioning the root word where useful
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::Empty => "Type a word first".to_string(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root}'!"),
            Self::NotRecognized => "You can't just make them up, you know!".to_string(),
        }
    }

    /// Build the title/message pair for display
    #[must_use]
    pub fn alert(self, root: &str) -> Alert {
        Alert {
            title: self.title().to_string(),
            message: self.message(root),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl std::error::Error for Rejection {}

/// A dismissible title/message pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}
