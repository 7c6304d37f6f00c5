//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, spaced_letters};
use crate::commands::{CheckResult, SolutionsResult, SurveyStatistics};
use crate::game::Submission;
use colored::Colorize;

/// Print the outcome of checking words against a root
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Root word: {}", spaced_letters(&result.root).bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (word, outcome) in &result.outcomes {
        match outcome {
            Submission::Accepted { points, .. } => {
                println!("  {} {:<16} +{points}", "✓".green().bold(), word);
            }
            Submission::Rejected { alert, .. } => {
                println!(
                    "  {} {:<16} {}: {}",
                    "✗".red().bold(),
                    word,
                    alert.title.red(),
                    alert.message.bright_black()
                );
            }
            Submission::Ignored => {
                println!(
                    "  {} {:<16} {}",
                    "·".bright_black(),
                    word,
                    "ignored".bright_black()
                );
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Score: {} ({} of {} words accepted)",
            result.score,
            result.accepted_count(),
            result.outcomes.len()
        )
        .bold()
    );
}

/// Print every playable word for a root
pub fn print_solutions_result(result: &SolutionsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No playable words.".red());
        return;
    }

    println!();
    for word in result.words.iter().take(limit.unwrap_or(result.words.len())) {
        println!("  {} {word}", length_badge(word.chars().count()).bright_black());
    }

    if let Some(limit) = limit
        && limit < result.words.len()
    {
        println!("  … and {} more", result.words.len() - limit);
    }

    println!(
        "\n📊 {} words, maximum score {}",
        result.words.len(),
        result.max_score.to_string().bright_yellow().bold()
    );
}

/// Print survey rankings
pub fn print_survey_statistics(stats: &SurveyStatistics, top: usize) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(70).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Roots surveyed:   {}", stats.total_roots);
    println!(
        "   Average words:    {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   Dead roots:       {}", stats.dead_roots.len());
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    let best = stats.entries.first().map_or(0, |e| e.max_score);

    println!("\n🏆 {}", "Richest roots:".bright_cyan().bold());
    for entry in stats.entries.iter().take(top) {
        let bar = create_progress_bar(entry.max_score as f64, best as f64, 30);
        println!(
            "   {:<10} {} {:4} pts {:3} words  longest: {}",
            entry.root.bright_white().bold(),
            bar.green(),
            entry.max_score,
            entry.word_count,
            entry.longest.as_deref().unwrap_or("-")
        );
    }

    if !stats.dead_roots.is_empty() {
        println!("\n⚠️  {}", "Roots with no playable words:".yellow().bold());
        println!("   {}", stats.dead_roots.join(", "));
    }
}
