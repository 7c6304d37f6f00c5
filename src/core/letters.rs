//! Letter multiset for constructibility checks
//!
//! A `LetterPool` counts how many times each letter of a root word is
//! available. A candidate can be spelled from the pool when every letter it
//! needs is present at least as many times as it is demanded.

use rustc_hash::FxHashMap;

/// Available letter counts taken from a root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    len: usize,
}

impl LetterPool {
    /// Build a pool from the letters of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("room");
    /// assert_eq!(pool.count('o'), 2);
    /// assert_eq!(pool.len(), 4);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut len = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// How many copies of `letter` the pool holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the pool
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Try to take one copy of `letter` out of the pool
    ///
    /// Returns `false` and leaves the pool untouched when no copy remains.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(n) if *n > 0 => {
                *n -= 1;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `candidate` can be spelled from this pool
    ///
    /// Each letter of the pool may be used at most once. The pool itself is
    /// not consumed; a scratch copy is drained instead.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("room");
    /// assert!(pool.can_spell("moo"));
    /// assert!(!pool.can_spell("mooo"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut scratch = self.clone();
        candidate.chars().all(|ch| scratch.take(ch))
    }
}

/// Check whether `candidate` can be formed from the letters of `root`
///
/// Convenience wrapper around [`LetterPool::can_spell`].
#[must_use]
pub fn is_constructible(candidate: &str, root: &str) -> bool {
    LetterPool::new(root).can_spell(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_counts_repeated_letters() {
        let pool = LetterPool::new("mississippi");
        assert_eq!(pool.count('m'), 1);
        assert_eq!(pool.count('i'), 4);
        assert_eq!(pool.count('s'), 4);
        assert_eq!(pool.count('p'), 2);
        assert_eq!(pool.count('z'), 0);
        assert_eq!(pool.len(), 11);
    }

    #[test]
    fn take_removes_one_copy() {
        let mut pool = LetterPool::new("room");
        assert!(pool.take('o'));
        assert_eq!(pool.count('o'), 1);
        assert!(pool.take('o'));
        assert!(!pool.take('o'));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn take_missing_letter_leaves_pool_untouched() {
        let mut pool = LetterPool::new("room");
        assert!(!pool.take('x'));
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn constructible_respects_letter_counts() {
        assert!(is_constructible("mo", "room"));
        assert!(is_constructible("moo", "room"));
        assert!(is_constructible("moor", "room"));
        assert!(!is_constructible("mooo", "room"));
        assert!(!is_constructible("roomy", "room"));
    }

    #[test]
    fn constructible_fails_when_demand_exceeds_supply() {
        // "sissy" needs a 'y', and "mississippi" has none
        assert!(!is_constructible("sissy", "mississippi"));
        assert!(is_constructible("miss", "mississippi"));
        assert!(is_constructible("sips", "mississippi"));
        assert!(!is_constructible("mimi", "mississippi"));
    }

    #[test]
    fn constructible_order_does_not_matter() {
        assert!(is_constructible("fist", "swift"));
        assert!(is_constructible("wits", "swift"));
        assert!(!is_constructible("fists", "swift"));
    }

    #[test]
    fn empty_candidate_is_always_constructible() {
        assert!(is_constructible("", "swift"));
        assert!(is_constructible("", ""));
    }

    #[test]
    fn can_spell_does_not_consume_pool() {
        let pool = LetterPool::new("swift");
        assert!(pool.can_spell("fist"));
        assert!(pool.can_spell("fist"));
        assert_eq!(pool.len(), 5);
    }
}
