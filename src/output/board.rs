//! Board rendering
//!
//! Six rows of five framed cells. Played cells carry their letter and a
//! background for `Correct`/`Present`; `Absent` cells and unplayed rows have
//! no color.

use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{Guess, MAX_GUESSES, Round};
use crate::wordlists::Dictionary;
use colored::{Color, Colorize};

const TOP: &str = " ___  ___  ___  ___  ___";
const SEPARATOR: &str = " ---  ---  ---  ---  ---";
const EMPTY_CELL: &str = "|   |";

/// Background colors for the two highlighted statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub correct: Color,
    pub present: Color,
}

impl Palette {
    pub const STANDARD: Self = Self {
        correct: Color::Green,
        present: Color::Yellow,
    };

    /// Orange and blue, distinguishable with the common forms of colorblindness
    pub const HIGH_CONTRAST: Self = Self {
        correct: Color::TrueColor {
            r: 245,
            g: 121,
            b: 58,
        },
        present: Color::TrueColor {
            r: 133,
            g: 192,
            b: 249,
        },
    };

    #[must_use]
    pub const fn for_mode(high_contrast: bool) -> Self {
        if high_contrast {
            Self::HIGH_CONTRAST
        } else {
            Self::STANDARD
        }
    }

    /// Background for a status, `None` for `Absent`
    #[must_use]
    pub const fn color_for(self, status: LetterStatus) -> Option<Color> {
        match status {
            LetterStatus::Correct => Some(self.correct),
            LetterStatus::Present => Some(self.present),
            LetterStatus::Absent => None,
        }
    }
}

/// Render the board for a round
#[must_use]
pub fn render<D: Dictionary + ?Sized>(round: &Round<'_, D>, high_contrast: bool) -> String {
    render_guesses(round.guesses(), Palette::for_mode(high_contrast))
}

/// Render a board from a guess history
///
/// Rows beyond the sixth are ignored.
#[must_use]
pub fn render_guesses(guesses: &[Guess], palette: Palette) -> String {
    let mut board = String::with_capacity((MAX_GUESSES * 2 + 1) * 64);
    board.push_str(TOP);
    board.push('\n');

    for row in 0..MAX_GUESSES {
        match guesses.get(row) {
            Some(guess) => push_guess_row(&mut board, guess, palette),
            None => board.push_str(&EMPTY_CELL.repeat(WORD_LENGTH)),
        }
        board.push('\n');
        board.push_str(SEPARATOR);
        board.push('\n');
    }

    board
}

fn push_guess_row(board: &mut String, guess: &Guess, palette: Palette) {
    let letters = guess.word().chars();
    for (i, &status) in guess.feedback().statuses().iter().enumerate() {
        let letter = format!(" {} ", char::from(letters[i].to_ascii_uppercase()));
        board.push('|');
        match palette.color_for(status) {
            Some(color) => board.push_str(&letter.on_color(color).black().bold().to_string()),
            None => board.push_str(&letter),
        }
        board.push('|');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn guess(word: &str, answer: &str) -> Guess {
        Guess::new(Word::new(word).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn empty_board_has_six_framed_rows() {
        let board = render_guesses(&[], Palette::STANDARD);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 1 + MAX_GUESSES * 2);
        assert_eq!(lines[0], TOP);
        for row in 0..MAX_GUESSES {
            assert_eq!(lines[1 + row * 2], "|   ||   ||   ||   ||   |");
            assert_eq!(lines[2 + row * 2], SEPARATOR);
        }
    }

    #[test]
    fn absent_letters_are_plain() {
        let board = render_guesses(&[guess("bumpy", "crane")], Palette::STANDARD);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[1], "| B || U || M || P || Y |");
        assert_eq!(lines[3], "|   ||   ||   ||   ||   |");
    }

    #[test]
    fn palettes_differ_only_in_highlight_colors() {
        assert_eq!(Palette::for_mode(false), Palette::STANDARD);
        assert_eq!(Palette::for_mode(true), Palette::HIGH_CONTRAST);
        assert_ne!(Palette::STANDARD.correct, Palette::HIGH_CONTRAST.correct);
        assert_ne!(Palette::STANDARD.present, Palette::HIGH_CONTRAST.present);

        for palette in [Palette::STANDARD, Palette::HIGH_CONTRAST] {
            assert_eq!(palette.color_for(LetterStatus::Absent), None);
            assert_ne!(
                palette.color_for(LetterStatus::Correct),
                palette.color_for(LetterStatus::Present)
            );
        }
    }

    #[test]
    fn highlighted_cells_use_mode_colors() {
        colored::control::set_override(true);

        let history = [guess("trace", "crane")];
        let standard = render_guesses(&history, Palette::STANDARD);
        let contrast = render_guesses(&history, Palette::HIGH_CONTRAST);

        let correct = " R ".on_color(Color::Green).black().bold().to_string();
        assert!(standard.contains(&correct));
        assert!(!contrast.contains(&correct));
        // T is absent in both
        assert!(standard.contains("| T |"));
        assert!(contrast.contains("| T |"));
        assert_ne!(standard, contrast);
    }

    #[test]
    fn extra_rows_are_ignored() {
        let history: Vec<Guess> = (0..8).map(|_| guess("bumpy", "crane")).collect();
        let board = render_guesses(&history, Palette::STANDARD);
        assert_eq!(board.lines().count(), 1 + MAX_GUESSES * 2);
    }
}
