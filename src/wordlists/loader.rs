//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{DICTIONARY, START_WORDS};
use crate::core::{DEFAULT_LANGUAGE, normalize};
use crate::error::GameError;
use crate::validator::WordSet;
use std::fs;
use std::path::Path;

/// Load words from a newline-separated file
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns [`GameError::ResourceUnavailable`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_word_list(&content))
}

/// Split newline-separated text into normalized, non-empty words
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| normalize(s)).collect()
}

/// Load root words from `path`, or the embedded list when no path is given
///
/// A missing file does not stop the game: the failure is logged and an empty
/// list is returned, which makes the next round use the default root word.
#[must_use]
pub fn load_start_words(path: Option<&Path>) -> Vec<String> {
    let Some(path) = path else {
        return words_from_slice(START_WORDS);
    };

    match load_from_file(path) {
        Ok(words) if words.is_empty() => {
            tracing::warn!(
                "{}; rounds will use the default root word",
                GameError::EmptyWordList {
                    path: path.to_path_buf()
                }
            );
            words
        }
        Ok(words) => {
            tracing::debug!(path = %path.display(), count = words.len(), "loaded root words");
            words
        }
        Err(err) => {
            tracing::warn!("{err}; rounds will use the default root word");
            Vec::new()
        }
    }
}

/// Build the dictionary from `path`, or the embedded list when no path is given
///
/// # Errors
///
/// Returns [`GameError::ResourceUnavailable`] if the file cannot be read, or
/// [`GameError::EmptyWordList`] if it holds no words, since every submission
/// would then be rejected.
pub fn load_dictionary(path: Option<&Path>) -> Result<WordSet, GameError> {
    let Some(path) = path else {
        return Ok(WordSet::new(DEFAULT_LANGUAGE, DICTIONARY));
    };

    let words = load_from_file(path)?;
    if words.is_empty() {
        return Err(GameError::EmptyWordList {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), count = words.len(), "loaded dictionary");
    Ok(WordSet::new(DEFAULT_LANGUAGE, words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parse_skips_blank_and_normalizes() {
        let words = parse_word_list("Swift\n\n  listen \r\n\nROOM\n");
        assert_eq!(words, vec!["swift", "listen", "room"]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n\n  \n").is_empty());
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["swift", "Listen"]);
        assert_eq!(words, vec!["swift", "listen"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("load.txt", "alpha\nbeta\n");
        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["alpha", "beta"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_resource_unavailable() {
        let result = load_from_file("/definitely/not/here/start.txt");
        assert!(matches!(
            result,
            Err(GameError::ResourceUnavailable { .. })
        ));
    }

    #[test]
    fn start_words_fall_back_to_empty_on_missing_file() {
        let words = load_start_words(Some(Path::new("/definitely/not/here/start.txt")));
        assert!(words.is_empty());
    }

    #[test]
    fn start_words_from_blank_file_are_empty() {
        let path = temp_file("blank_start.txt", "\n  \n");
        assert!(load_start_words(Some(&path)).is_empty());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn start_words_default_to_embedded() {
        let words = load_start_words(None);
        assert_eq!(words.len(), START_WORDS.len());
    }

    #[test]
    fn dictionary_rejects_empty_file() {
        let path = temp_file("empty_dict.txt", "\n\n");
        let result = load_dictionary(Some(&path));
        assert!(matches!(result, Err(GameError::EmptyWordList { .. })));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn dictionary_from_file() {
        let path = temp_file("dict.txt", "fist\nwits\n");
        let dict = load_dictionary(Some(&path)).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("fist"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dict = load_dictionary(None).unwrap();
        assert_eq!(dict.language(), "en");
        assert!(dict.contains("fist"));
    }
}
