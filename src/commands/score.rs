//! Single pair scoring command

use crate::core::{Classification, ScrambleError, ScramblePair};
use crate::output::formatters::message;
use crate::scoring::assess;

/// Result of scoring one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub pair: ScramblePair,
    pub classification: Classification,
    pub message: String,
}

/// Score a scramble against its word
///
/// # Errors
///
/// Returns an error if either input contains non-letter characters.
pub fn score_pair(scrambled: &str, word: &str) -> Result<ScoreResult, ScrambleError> {
    let pair = ScramblePair::new(scrambled, word)?;
    Ok(score_validated(pair))
}

/// Score a pair that has already been validated
#[must_use]
pub fn score_validated(pair: ScramblePair) -> ScoreResult {
    let classification = assess(&pair).classification;
    let message = message(&pair, classification);

    ScoreResult {
        pair,
        classification,
        message,
    }
}
