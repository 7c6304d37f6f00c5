//! Survey command
//!
//! Ranks root words by how many points a round could yield.

use super::solutions::find_solutions;
use crate::validator::{Dictionary, Validator, WordSet};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// One surveyed root word
#[derive(Debug, Clone)]
pub struct SurveyEntry {
    pub root: String,
    pub word_count: usize,
    pub max_score: usize,
    pub longest: Option<String>,
}

/// Statistics from surveying a list of root words
#[derive(Debug)]
pub struct SurveyStatistics {
    /// Richest root first
    pub entries: Vec<SurveyEntry>,
    pub total_roots: usize,
    /// Roots with nothing playable
    pub dead_roots: Vec<String>,
    pub average_words: f64,
    pub total_time: Duration,
}

/// Survey every root word (or the first `limit` of them)
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_survey<D: Dictionary + Sync>(
    validator: &Validator<D>,
    candidates: &WordSet,
    roots: &[String],
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = roots.iter().take(limit.unwrap_or(roots.len())).collect();

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut entries = Vec::with_capacity(roots.len());

    for root in roots {
        pb.set_message(root.clone());
        let solutions = find_solutions(validator, candidates, root);

        entries.push(SurveyEntry {
            root: solutions.root,
            word_count: solutions.words.len(),
            max_score: solutions.max_score,
            longest: solutions.words.first().cloned(),
        });
        pb.inc(1);
    }

    pb.finish_and_clear();

    summarize(entries, start.elapsed())
}

fn summarize(mut entries: Vec<SurveyEntry>, total_time: Duration) -> SurveyStatistics {
    entries.sort_by(|a, b| {
        b.max_score
            .cmp(&a.max_score)
            .then_with(|| a.root.cmp(&b.root))
    });

    let total_roots = entries.len();
    let dead_roots = entries
        .iter()
        .filter(|e| e.word_count == 0)
        .map(|e| e.root.clone())
        .collect();
    let average_words = if total_roots == 0 {
        0.0
    } else {
        entries.iter().map(|e| e.word_count).sum::<usize>() as f64 / total_roots as f64
    };

    SurveyStatistics {
        entries,
        total_roots,
        dead_roots,
        average_words,
        total_time,
    }
}
