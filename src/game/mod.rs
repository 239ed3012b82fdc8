//! Round state machine

mod round;

pub use round::{Guess, GuessError, MAX_GUESSES, Round, RoundOutcome, RoundState};
