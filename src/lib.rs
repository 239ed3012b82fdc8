//! cliordle
//!
//! Terminal Wordle with persistent streaks, a guess distribution and display settings.
//!
//! # Quick Start
//!
//! ```rust
//! use cliordle::core::Word;
//! use cliordle::game::{Round, RoundState};
//! use cliordle::player::{MemoryStore, Session};
//! use cliordle::wordlists::WordList;
//!
//! let words = WordList::embedded();
//! let mut session = Session::open(MemoryStore::new()).unwrap();
//!
//! let mut round = Round::with_answer(&words, Word::new("crane").unwrap()).unwrap();
//! round.submit_guess("slate").unwrap();
//! round.submit_guess("crane").unwrap();
//! assert_eq!(round.state(), RoundState::Solved);
//!
//! session.record_outcome(&round).unwrap();
//! assert_eq!(session.record().distribution[1], 1);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists and dictionary
pub mod wordlists;

// Player record and persistence
pub mod player;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
