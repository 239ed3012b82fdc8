//! Interactive play mode
//!
//! Reads one guess per line, redraws the board after every accepted guess and
//! records the outcome when the round ends.

use crate::game::{MAX_GUESSES, Round, RoundOutcome};
use crate::output::formatters::share_grid;
use crate::output::{render, write_outcome};
use crate::player::{PlayerStore, Session};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The input stream ended before the round finished
    #[error("input closed before the round finished; nothing was recorded")]
    InputClosed,
}

/// Options for a play session
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Clear the terminal before each redraw
    pub clear_screen: bool,
}

/// Play one round
///
/// The final board and outcome line are always written before the outcome is
/// persisted, so a storage failure never hides the result.
///
/// # Errors
///
/// Returns an error if:
/// - The dictionary has no answer to offer
/// - Input closes before the round finishes (`PlayError::InputClosed`)
/// - Reading input or writing output fails
/// - The statistics could not be saved (they are still updated in memory)
pub fn run_play<S, D, R, W>(
    session: &mut Session<S>,
    dictionary: &D,
    input: &mut R,
    out: &mut W,
    config: PlayConfig,
) -> Result<RoundOutcome>
where
    S: PlayerStore,
    D: Dictionary + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut round = Round::start(dictionary).context("could not start a round")?;
    let settings = session.record().settings;

    draw(out, &round, settings.high_contrast, config)?;
    if settings.hard_mode {
        writeln!(out, "Hard mode is on.")?;
    }

    let mut buf = Vec::new();
    while let Some(attempt) = round.attempt() {
        write!(out, "Guess {attempt}/{MAX_GUESSES}: ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).context("could not read guess")? == 0 {
            log::warn!("input closed on attempt {attempt}, abandoning round");
            writeln!(out)?;
            return Err(PlayError::InputClosed.into());
        }
        // Undecodable bytes become U+FFFD and are rejected as invalid characters
        let line = String::from_utf8_lossy(&buf);

        let accepted = round.submit_guess(&line).map(|_| ());
        match accepted {
            Ok(()) => draw(out, &round, settings.high_contrast, config)?,
            Err(reason) => {
                log::debug!("rejected guess {:?}: {reason}", line.trim());
                writeln!(out, "{} is an invalid guess ({reason}), try again", line.trim())?;
            }
        }
    }

    let outcome = round
        .outcome()
        .context("round ended without an outcome")?;
    write_outcome(out, outcome, round.answer().text())?;
    writeln!(out, "\n{}\n", share_grid(round.guesses(), round.is_solved()))?;

    session
        .record_outcome(&round)
        .context("statistics were updated but could not be saved")?;
    Ok(outcome)
}

fn draw<D, W>(out: &mut W, round: &Round<'_, D>, high_contrast: bool, config: PlayConfig) -> Result<()>
where
    D: Dictionary + ?Sized,
    W: Write,
{
    if config.clear_screen {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    writeln!(out, "{}", render(round, high_contrast))?;
    Ok(())
}
