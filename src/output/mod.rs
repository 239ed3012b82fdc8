//! Terminal output formatting
//!
//! Board rendering and summary text.

pub mod board;
pub mod display;
pub mod formatters;

pub use board::{Palette, render, render_guesses};
pub use display::{write_outcome, write_settings, write_stats};
