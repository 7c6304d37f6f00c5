//! Game rule configuration
//!
//! Rules decide which checks the validator runs and how empty input is handled.

use std::fmt;

/// Fallback root word used when no word list is available
pub const DEFAULT_ROOT_WORD: &str = "some";

/// Language tag the dictionary is queried with
pub const DEFAULT_LANGUAGE: &str = "en";

/// Shortest word the strict variant accepts
pub const MIN_STRICT_LENGTH: usize = 3;

/// Rule variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Original rules: original, constructible, real
    Classic,
    /// Classic rules plus a minimum length and a ban on the root word itself
    #[default]
    Strict,
}

impl Variant {
    /// Parse a variant name
    ///
    /// Supported names: "classic", "strict". Defaults to strict if the name is
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "classic" | "v1" => Self::Classic,
            _ => Self::Strict,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do with a submission that is empty after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInput {
    /// Drop it silently, no alert
    #[default]
    Ignore,
    /// Run it through the normal checks like any other candidate
    Validate,
}

impl EmptyInput {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "validate" | "reject" => Self::Validate,
            _ => Self::Ignore,
        }
    }
}

/// Complete rule set for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub variant: Variant,
    pub empty_input: EmptyInput,
    pub language: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl RuleSet {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            empty_input: EmptyInput::default(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    #[must_use]
    pub fn with_empty_input(mut self, empty_input: EmptyInput) -> Self {
        self.empty_input = empty_input;
        self
    }

    /// Whether the length/identity guard applies
    #[inline]
    #[must_use]
    pub const fn guards_length(&self) -> bool {
        matches!(self.variant, Variant::Strict)
    }
}

/// Lowercase a raw submission and trim surrounding whitespace
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Fist\n"), "fist");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_name() {
        assert_eq!(Variant::from_name("classic"), Variant::Classic);
        assert_eq!(Variant::from_name("CLASSIC"), Variant::Classic);
        assert_eq!(Variant::from_name("strict"), Variant::Strict);
        assert_eq!(Variant::from_name("unknown"), Variant::Strict);
    }

    #[test]
    fn empty_input_from_name() {
        assert_eq!(EmptyInput::from_name("validate"), EmptyInput::Validate);
        assert_eq!(EmptyInput::from_name("ignore"), EmptyInput::Ignore);
        assert_eq!(EmptyInput::from_name("whatever"), EmptyInput::Ignore);
    }

    #[test]
    fn only_strict_guards_length() {
        assert!(RuleSet::new(Variant::Strict).guards_length());
        assert!(!RuleSet::new(Variant::Classic).guards_length());
    }

    #[test]
    fn default_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.variant, Variant::Strict);
        assert_eq!(rules.empty_input, EmptyInput::Ignore);
        assert_eq!(rules.language, "en");
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("Swift"), "swift");
        assert_eq!(normalize("\t fist  "), "fist");
        assert_eq!(normalize("   "), "");
    }
}
