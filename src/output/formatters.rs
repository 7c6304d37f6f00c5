//! Formatting utilities for terminal output

/// Circled number for a word length, e.g. `④` for 4
///
/// Lengths above 20 fall back to `(n)`.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        0 => '⓪'.to_string(),
        1..=20 => char::from_u32(0x2460 + len as u32 - 1)
            .map_or_else(|| format!("({len})"), String::from),
        _ => format!("({len})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Letters of a word spaced out for a title, e.g. `S W I F T`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
