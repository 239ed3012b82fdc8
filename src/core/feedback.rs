//! Per-letter feedback for a guess
//!
//! Each of the five slots of a guess is rated against the answer:
//! - `Correct`: right letter, right position
//! - `Present`: letter occurs elsewhere in the answer
//! - `Absent`: letter does not occur, or every occurrence is already credited

use super::word::{WORD_LENGTH, Word};

/// Rating of a single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Share-grid glyph for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one status per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Rate `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches are `Correct` and consume that answer slot
    /// 2. Second pass: remaining letters take the leftmost unconsumed matching answer
    ///    slot as `Present`, otherwise they are `Absent`
    ///
    /// A letter repeated in the guess is credited at most as many times as it occurs
    /// in the answer.
    ///
    /// # Examples
    /// ```
    /// use cliordle::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let answer = Word::new("allow").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::evaluate(&guess, &answer).statuses(),
    ///     &[Present, Present, Correct, Absent, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut assigned = [false; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];
        let guess = guess.chars();
        let answer_chars = answer.chars();

        // Allow: index needed to access guess[i], answer[i] and the per-slot flags
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer_chars[i] {
                result[i] = LetterStatus::Correct;
                assigned[i] = true;
                consumed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if assigned[i] || !answer.has_letter(guess[i]) {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer_chars[j] == guess[i]) {
                result[i] = LetterStatus::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[cfg(test)]
    fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}
