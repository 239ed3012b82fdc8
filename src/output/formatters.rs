//! Formatting utilities for terminal output

use crate::game::{Guess, MAX_GUESSES};

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

/// Spoiler-free emoji grid for sharing a finished round
///
/// The score is `n/6` for a win and `X/6` for a loss.
#[must_use]
pub fn share_grid(guesses: &[Guess], solved: bool) -> String {
    let score = if solved {
        guesses.len().to_string()
    } else {
        "X".to_string()
    };
    let mut grid = format!("cliordle {score}/{MAX_GUESSES}\n");
    for guess in guesses {
        grid.push('\n');
        grid.push_str(&guess.feedback().to_emoji());
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn share_grid_win_and_loss() {
        let answer = Word::new("crane").unwrap();
        let history = vec![
            Guess::new(Word::new("trace").unwrap(), &answer),
            Guess::new(answer.clone(), &answer),
        ];

        assert_eq!(
            share_grid(&history, true),
            "cliordle 2/6\n\n⬜🟩🟩🟨🟩\n🟩🟩🟩🟩🟩"
        );
        assert!(share_grid(&history[..1], false).starts_with("cliordle X/6\n"));
    }
}
