//! Summary text for rounds, statistics and settings

use super::formatters::create_progress_bar;
use crate::game::{MAX_GUESSES, RoundOutcome};
use crate::player::{PlayerRecord, Settings};
use colored::Colorize;
use std::io::{self, Write};

const BAR_WIDTH: usize = 30;

/// Praise for a win in `guesses` attempts
#[must_use]
pub const fn win_message(guesses: usize) -> &'static str {
    match guesses {
        1 => "Genius!",
        2 => "Magnificent!",
        3 => "Impressive!",
        4 => "Splendid!",
        5 => "Great!",
        _ => "Phew!",
    }
}

/// Print the line announcing how a round ended
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write>(out: &mut W, outcome: RoundOutcome, answer: &str) -> io::Result<()> {
    match outcome {
        RoundOutcome::Solved { guesses } => writeln!(
            out,
            "{} Solved in {guesses}/{MAX_GUESSES}.",
            win_message(guesses).bright_green().bold()
        ),
        RoundOutcome::Exhausted => writeln!(
            out,
            "The answer was {}",
            answer.to_uppercase().bright_yellow().bold()
        ),
    }
}

/// Print lifetime statistics and the guess distribution
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_stats<W: Write>(out: &mut W, record: &PlayerRecord) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "STATISTICS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "   Played:          {}", record.played)?;
    writeln!(
        out,
        "   Win %:           {}",
        format!("{:.0}", record.win_percentage()).bright_yellow().bold()
    )?;
    writeln!(out, "   Current streak:  {}", record.current_streak)?;
    writeln!(out, "   Longest streak:  {}", record.longest_streak)?;

    writeln!(out, "\n📈 {}", "Guess distribution:".bright_cyan().bold())?;
    let max = f64::from(record.max_distribution());
    for (i, &count) in record.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), max, BAR_WIDTH);
        writeln!(out, "   {}: {} {count:4}", i + 1, bar.green())?;
    }
    Ok(())
}

/// Print the current settings
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_settings<W: Write>(out: &mut W, settings: &Settings) -> io::Result<()> {
    writeln!(out, "{}", "--- SETTINGS ---".bright_cyan().bold())?;
    writeln!(out, "High contrast:  {}", on_off(settings.high_contrast))?;
    writeln!(
        out,
        "Hard mode:      {} (stored only, not enforced)",
        on_off(settings.hard_mode)
    )
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
