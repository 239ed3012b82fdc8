//! Answer selection and guess validation

use super::embedded::{ALLOWED, ANSWERS};
use super::loader::words_from_slice;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("no answer words are available")]
    Exhausted,
}

/// Source of answers and judge of accepted guesses
pub trait Dictionary {
    /// Pick a secret word for a new round
    ///
    /// The returned word is always an accepted guess.
    ///
    /// # Errors
    /// Returns `DictionaryError::Exhausted` if there is nothing to pick from.
    fn pick_answer(&self) -> Result<Word, DictionaryError>;

    /// Whether `word` (already lowercase) may be submitted as a guess
    fn is_accepted_guess(&self, word: &str) -> bool;
}

/// Dictionary backed by an answer list and an accepted-guess set
///
/// Every answer is also inserted into the accepted set, so a round's answer
/// can always be guessed.
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl WordList {
    #[must_use]
    pub fn new(answers: Vec<Word>, guesses: impl IntoIterator<Item = Word>) -> Self {
        let mut accepted: FxHashSet<String> = guesses
            .into_iter()
            .map(|word| word.text().to_string())
            .collect();
        accepted.extend(answers.iter().map(|word| word.text().to_string()));

        Self { answers, accepted }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Embedded answers with a custom accepted-guess list
    #[must_use]
    pub fn with_guesses(guesses: Vec<Word>) -> Self {
        Self::new(words_from_slice(ANSWERS), guesses)
    }

    #[cfg(test)]
    fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[cfg(test)]
    fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Pick an answer using the given random source
    ///
    /// # Errors
    /// Returns `DictionaryError::Exhausted` if the answer list is empty.
    pub fn pick_answer_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, DictionaryError> {
        self.answers
            .choose(rng)
            .cloned()
            .ok_or(DictionaryError::Exhausted)
    }
}

impl Dictionary for WordList {
    fn pick_answer(&self) -> Result<Word, DictionaryError> {
        self.pick_answer_with(&mut rand::rng())
    }

    fn is_accepted_guess(&self, word: &str) -> bool {
        self.accepted.contains(word)
    }
}
