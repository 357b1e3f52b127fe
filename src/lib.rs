//! Word Scramble Scorer
//!
//! Scores how hard a word scramble is to solve: `not`, `poor`, `fair` or `hard`,
//! based on whether the scramble looks like a real word and how many letters stayed in place.
//!
//! # Quick Start
//!
//! ```rust
//! use scramble_score::core::Classification;
//! use scramble_score::scoring::classify;
//!
//! let difficulty = classify("ONYRI", "IRONY").unwrap();
//! assert_eq!(difficulty, Classification::Hard);
//! ```

// Core domain types
pub mod core;

// Scoring algorithms
pub mod scoring;

// Input records
pub mod records;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
