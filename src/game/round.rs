//! A single round of Wordle
//!
//! The round owns its answer and guess history and moves through
//! `AwaitingGuess(1..=6)` to either `Solved` or `Exhausted`.

use crate::core::{Feedback, Word, WordError};
use crate::wordlists::{Dictionary, DictionaryError};
use thiserror::Error;

/// Attempts available in one round
pub const MAX_GUESSES: usize = 6;

/// Why a submitted guess was not accepted
///
/// A rejected guess never consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("guess must contain only the letters a-z")]
    InvalidCharacters,
    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),
    #[error("the round is already over")]
    RoundOver,
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength(len),
            WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// Where the round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for attempt `n` (1-based)
    AwaitingGuess(usize),
    Solved,
    Exhausted,
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Solved { guesses: usize },
    Exhausted,
}

/// An accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    /// Rate `word` against `answer`
    #[must_use]
    pub fn new(word: Word, answer: &Word) -> Self {
        let feedback = Feedback::evaluate(&word, answer);
        Self { word, feedback }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// One game: a secret answer and up to six guesses
pub struct Round<'d, D: Dictionary + ?Sized> {
    dictionary: &'d D,
    answer: Word,
    guesses: Vec<Guess>,
    state: RoundState,
}

impl<'d, D: Dictionary + ?Sized> Round<'d, D> {
    /// Start a round with an answer picked by the dictionary
    ///
    /// # Errors
    /// Returns `DictionaryError::Exhausted` if the dictionary has no answers.
    pub fn start(dictionary: &'d D) -> Result<Self, DictionaryError> {
        let answer = dictionary.pick_answer()?;
        log::debug!("starting round");
        Ok(Self::new(dictionary, answer))
    }

    /// Start a round with a known answer
    ///
    /// # Errors
    /// Returns `GuessError::NotInDictionary` if the dictionary does not accept
    /// `answer` as a guess, since such a round could never be solved.
    pub fn with_answer(dictionary: &'d D, answer: Word) -> Result<Self, GuessError> {
        if !dictionary.is_accepted_guess(answer.text()) {
            return Err(GuessError::NotInDictionary(answer.text().to_string()));
        }
        Ok(Self::new(dictionary, answer))
    }

    fn new(dictionary: &'d D, answer: Word) -> Self {
        Self {
            dictionary,
            answer,
            guesses: Vec::with_capacity(MAX_GUESSES),
            state: RoundState::AwaitingGuess(1),
        }
    }

    /// Submit a raw guess as typed by the player
    ///
    /// Surrounding whitespace is ignored and any letter case is accepted.
    ///
    /// # Errors
    /// Returns `GuessError` if the guess is malformed, not an accepted word,
    /// or the round has already ended. The round is unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use cliordle::core::Word;
    /// use cliordle::game::{GuessError, Round, RoundState};
    /// use cliordle::wordlists::WordList;
    ///
    /// let answer = Word::new("crane").unwrap();
    /// let words = WordList::new(vec![answer.clone()], vec![Word::new("slate").unwrap()]);
    /// let mut round = Round::with_answer(&words, answer).unwrap();
    ///
    /// assert_eq!(round.submit_guess("abc").unwrap_err(), GuessError::InvalidLength(3));
    /// round.submit_guess("SLATE").unwrap();
    /// assert_eq!(round.state(), RoundState::AwaitingGuess(2));
    /// round.submit_guess("crane").unwrap();
    /// assert_eq!(round.state(), RoundState::Solved);
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<&Guess, GuessError> {
        let RoundState::AwaitingGuess(attempt) = self.state else {
            return Err(GuessError::RoundOver);
        };

        let word = Word::new(raw.trim())?;
        if !self.dictionary.is_accepted_guess(word.text()) {
            return Err(GuessError::NotInDictionary(word.text().to_string()));
        }

        let solved = word == self.answer;
        self.guesses.push(Guess::new(word, &self.answer));

        self.state = if solved {
            RoundState::Solved
        } else if attempt >= MAX_GUESSES {
            RoundState::Exhausted
        } else {
            RoundState::AwaitingGuess(attempt + 1)
        };
        log::debug!("attempt {attempt} accepted, now {:?}", self.state);

        Ok(&self.guesses[self.guesses.len() - 1])
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, RoundState::Solved)
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Current 1-based attempt, `None` once the round is over
    #[must_use]
    pub const fn attempt(&self) -> Option<usize> {
        match self.state {
            RoundState::AwaitingGuess(n) => Some(n),
            RoundState::Solved | RoundState::Exhausted => None,
        }
    }

    /// Outcome of a finished round, `None` while still in play
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Solved => Some(RoundOutcome::Solved {
                guesses: self.guesses.len(),
            }),
            RoundState::Exhausted => Some(RoundOutcome::Exhausted),
            RoundState::AwaitingGuess(_) => None,
        }
    }
}
