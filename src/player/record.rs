//! Lifetime statistics and display settings

use crate::game::{MAX_GUESSES, Round, RoundOutcome};
use crate::wordlists::Dictionary;
use serde::{Deserialize, Serialize};

/// Display settings
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Use the colorblind-friendly palette
    pub high_contrast: bool,
    /// Stored and displayed; not enforced during play
    pub hard_mode: bool,
}

/// Everything persisted about the player
///
/// `distribution[i]` counts wins in exactly `i + 1` guesses.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub settings: Settings,
    pub played: u32,
    pub won: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub distribution: [u32; MAX_GUESSES],
}

impl PlayerRecord {
    /// Fold a finished round into the statistics
    ///
    /// Returns `false` (and changes nothing) if the round is still in play.
    pub fn record_outcome<D: Dictionary + ?Sized>(&mut self, round: &Round<'_, D>) -> bool {
        match round.outcome() {
            Some(outcome) => {
                self.apply(outcome);
                true
            }
            None => false,
        }
    }

    /// Update the statistics for one finished round
    ///
    /// # Examples
    /// ```
    /// use cliordle::game::RoundOutcome;
    /// use cliordle::player::PlayerRecord;
    ///
    /// let mut record = PlayerRecord::default();
    /// record.apply(RoundOutcome::Solved { guesses: 3 });
    /// record.apply(RoundOutcome::Exhausted);
    ///
    /// assert_eq!(record.played, 2);
    /// assert_eq!(record.won, 1);
    /// assert_eq!(record.current_streak, 0);
    /// assert_eq!(record.longest_streak, 1);
    /// assert_eq!(record.distribution, [0, 0, 1, 0, 0, 0]);
    /// ```
    pub fn apply(&mut self, outcome: RoundOutcome) {
        self.played += 1;
        match outcome {
            RoundOutcome::Solved { guesses } => {
                self.won += 1;
                self.current_streak += 1;
                self.longest_streak = self.longest_streak.max(self.current_streak);
                let slot = guesses.clamp(1, MAX_GUESSES) - 1;
                self.distribution[slot] += 1;
            }
            RoundOutcome::Exhausted => {
                self.current_streak = 0;
            }
        }
    }

    /// Share of played rounds that were won, 0-100
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }

    /// Largest bucket of the guess distribution
    #[must_use]
    pub fn max_distribution(&self) -> u32 {
        self.distribution.iter().copied().max().unwrap_or(0)
    }
}
