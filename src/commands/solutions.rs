//! Solutions command
//!
//! Lists every dictionary word a fresh round would accept for a root word.

use crate::core::normalize;
use crate::validator::{Dictionary, Validator, WordSet};
use rayon::prelude::*;

/// Every playable word for one root
#[derive(Debug, Clone)]
pub struct SolutionsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for playing all of `words`
    pub max_score: usize,
}

/// Scan `candidates` for words the validator accepts against `root`
///
/// The scan runs in parallel; each word is checked as the first submission
/// of an empty round.
pub fn find_solutions<D: Dictionary + Sync>(
    validator: &Validator<D>,
    candidates: &WordSet,
    root: &str,
) -> SolutionsResult {
    let root = normalize(root);
    let pool: Vec<&str> = candidates.words().collect();

    let mut words: Vec<String> = pool
        .par_iter()
        .filter_map(|&word| validator.validate(word, &root, &[]).ok())
        .map(|accepted| accepted.word)
        .collect();

    words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let max_score = words.iter().map(|w| w.chars().count()).sum();

    SolutionsResult {
        root,
        words,
        max_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RuleSet, Variant};

    fn dictionary() -> WordSet {
        WordSet::new("en", ["fist", "wits", "if", "it", "swift", "sift", "tin", "fists"])
    }

    #[test]
    fn strict_solutions_sorted_longest_first() {
        let dict = dictionary();
        let validator = Validator::new(RuleSet::new(Variant::Strict), &dict);

        let result = find_solutions(&validator, &dict, "swift");

        assert_eq!(result.words, vec!["fist", "sift", "wits"]);
        assert_eq!(result.max_score, 12);
    }

    #[test]
    fn classic_solutions_include_short_words_and_root() {
        let dict = dictionary();
        let validator = Validator::new(RuleSet::new(Variant::Classic), &dict);

        let result = find_solutions(&validator, &dict, "SWIFT");

        assert_eq!(result.root, "swift");
        assert_eq!(
            result.words,
            vec!["swift", "fist", "sift", "wits", "if", "it"]
        );
        assert_eq!(result.max_score, 21);
    }

    #[test]
    fn no_solutions() {
        let dict = dictionary();
        let validator = Validator::new(RuleSet::default(), &dict);
        let result = find_solutions(&validator, &dict, "zzz");
        assert!(result.words.is_empty());
        assert_eq!(result.max_score, 0);
    }
}
