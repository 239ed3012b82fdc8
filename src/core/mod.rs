//! Core domain types for Wordle
//!
//! Words and the feedback rules. Everything here is pure.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
