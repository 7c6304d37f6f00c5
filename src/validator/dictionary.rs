//! Dictionary capability
//!
//! The validator never looks words up itself; it asks a [`Dictionary`].
//! [`WordSet`] is the in-memory implementation backed by a word list.

use rustc_hash::FxHashSet;

/// Something that can tell whether a whole string is a real word
pub trait Dictionary {
    /// Returns `true` if `word` is a recognized word in `language`
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

/// In-memory dictionary for a single language
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    language: String,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a dictionary from an iterator of words
    ///
    /// Words are lowercased and trimmed; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::validator::{Dictionary, WordSet};
    ///
    /// let dict = WordSet::new("en", ["Fist", "swift"]);
    /// assert!(dict.is_recognized("fist", "en"));
    /// assert!(!dict.is_recognized("fist", "fr"));
    /// ```
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All words in the set, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordSet {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_members_only() {
        let dict = WordSet::new("en", ["fist", "swift", "wits"]);
        assert!(dict.is_recognized("fist", "en"));
        assert!(dict.is_recognized("wits", "en"));
        assert!(!dict.is_recognized("fits", "en"));
    }

    #[test]
    fn language_must_match() {
        let dict = WordSet::new("en", ["fist"]);
        assert!(dict.is_recognized("fist", "EN"));
        assert!(!dict.is_recognized("fist", "de"));
    }

    #[test]
    fn new_normalizes_and_skips_blank() {
        let dict = WordSet::new("en", ["  Room ", "", "   ", "MOOR"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("room"));
        assert!(dict.contains("moor"));
    }

    #[test]
    fn duplicates_collapse() {
        let dict = WordSet::new("en", ["fist", "FIST", "fist"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn empty_set() {
        let dict = WordSet::new("en", Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(!dict.is_recognized("", "en"));
    }

    #[test]
    fn reference_forwards() {
        let dict = WordSet::new("en", ["fist"]);
        let by_ref = &dict;
        assert!(Dictionary::is_recognized(&by_ref, "fist", "en"));
    }
}
