//! Core domain types for word scrambles
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure values, cheap to construct and safe to share across threads.

mod classification;
pub mod letters;
mod scramble;

pub use classification::{Classification, UnknownLabel};
pub use letters::LetterClass;
pub use scramble::{ScrambleError, ScramblePair, Side, letter_counts};
