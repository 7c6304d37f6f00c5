//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::game::{Game, Submission};
use crate::output::formatters::length_badge;
use crate::validator::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<D: Dictionary>(game: &mut Game<D>, start_words: &[String]) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, start_words, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the line-based game loop over arbitrary input and output
///
/// Returns when input is exhausted or the player quits.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<D, R, W>(
    game: &mut Game<D>,
    start_words: &[String],
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Word Scramble - Simple Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make words from the letters of the root word.")?;
    writeln!(out, "Commands: ':new' for a new root word, ':words' to list your words, ':quit' to exit\n")?;

    game.start_round(start_words, &mut rand::rng());
    print_round_header(game, out)?;

    loop {
        let Some(line) = read_line(input, out, "Word")? else {
            break;
        };

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                game.start_round(start_words, &mut rand::rng());
                writeln!(out, "\n🔄 New round started!\n")?;
                print_round_header(game, out)?;
            }
            ":words" | ":w" => print_used_words(game, out)?,
            _ => match game.submit(&line) {
                Submission::Accepted { word, points } => {
                    writeln!(
                        out,
                        "{} {} (+{points}, score {})\n",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        game.score().to_string().bright_cyan()
                    )?;
                }
                Submission::Rejected { alert, .. } => {
                    writeln!(
                        out,
                        "{} {}: {}\n",
                        "❌".red(),
                        alert.title.red().bold(),
                        alert.message
                    )?;
                    game.acknowledge();
                }
                Submission::Ignored => {}
            },
        }
    }

    writeln!(out, "\n👋 Final score: {}. Thanks for playing!\n", game.score())?;
    Ok(())
}

fn print_round_header<D: Dictionary, W: Write>(game: &Game<D>, out: &mut W) -> io::Result<()> {
    if game.used_fallback() {
        writeln!(
            out,
            "{} No word list, using default root word '{}'",
            "⚠️".yellow(),
            game.root()
        )?;
    }
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Root word: {}  ({} rules)",
        game.root().to_uppercase().bright_yellow().bold(),
        game.rules().variant
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")
}

fn print_used_words<D: Dictionary, W: Write>(game: &Game<D>, out: &mut W) -> io::Result<()> {
    if game.used_words().is_empty() {
        return writeln!(out, "No words yet.\n");
    }

    for word in game.used_words() {
        writeln!(out, "  {} {word}", length_badge(word.chars().count()))?;
    }
    writeln!(out, "Score: {}\n", game.score())
}

/// Prompt and read one line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
