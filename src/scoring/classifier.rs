//! Scramble difficulty decision
//!
//! Combines the word-likeness heuristic and positional overlap into one of four labels.
//! Rules are evaluated in order and the first match wins:
//!
//! 1. **not**  - the scramble is the word, or uses different letters
//! 2. **poor** - doesn't look real, and the first letter or a consecutive pair is in place
//! 3. **hard** - looks real, and no letter is in place
//! 4. **fair** - everything else

use super::looks_real::looks_real;
use super::overlap::{has_positional_overlap, matching_positions};
use crate::core::{Classification, ScrambleError, ScramblePair};

/// Why a scramble is not a scramble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReason {
    /// The scramble equals the word
    Identical,
    /// The scramble's letters differ from the word's
    DifferentLetters,
}

/// A classification together with the evidence behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub classification: Classification,
    /// Set only when the pair short-circuited to `not`
    pub not_reason: Option<NotReason>,
    /// `None` when the pair short-circuited to `not`
    pub looks_real: Option<bool>,
    pub positional_overlap: bool,
    pub matching_positions: Vec<usize>,
}

/// Classify a scramble of a word
///
/// Both inputs are case-insensitive.
///
/// # Errors
/// Returns `ScrambleError` if either input contains anything other than letters A-Z.
///
/// # Examples
/// ```
/// use scramble_score::core::Classification;
/// use scramble_score::scoring::classify;
///
/// assert_eq!(classify("ONYRI", "IRONY").unwrap(), Classification::Hard);
/// assert_eq!(classify("IOYRN", "irony").unwrap(), Classification::Poor);
/// assert_eq!(classify("IRONY", "IRONY").unwrap(), Classification::Not);
/// ```
pub fn classify(scrambled: &str, word: &str) -> Result<Classification, ScrambleError> {
    let pair = ScramblePair::new(scrambled, word)?;
    Ok(assess(&pair).classification)
}

/// Classify a validated pair and keep the intermediate results
#[must_use]
pub fn assess(pair: &ScramblePair) -> Assessment {
    let not_reason = if pair.is_identical() {
        Some(NotReason::Identical)
    } else if !pair.is_anagram() {
        Some(NotReason::DifferentLetters)
    } else {
        None
    };

    if not_reason.is_some() {
        return Assessment {
            classification: Classification::Not,
            not_reason,
            looks_real: None,
            positional_overlap: false,
            matching_positions: Vec::new(),
        };
    }

    // Anagrams have equal length, so the index-wise checks below stay in bounds
    let word = pair.word();
    let scrambled = pair.scrambled();
    let real = looks_real(scrambled);
    let overlap = has_positional_overlap(word, scrambled);
    let matches = matching_positions(word, scrambled);

    let classification = if !real && overlap {
        Classification::Poor
    } else if real && matches.is_empty() {
        Classification::Hard
    } else {
        Classification::Fair
    };

    Assessment {
        classification,
        not_reason: None,
        looks_real: Some(real),
        positional_overlap: overlap,
        matching_positions: matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(scrambled: &str, word: &str) -> Classification {
        classify(scrambled, word).unwrap()
    }

    #[test]
    fn sample_scrambles() {
        assert_eq!(class("MAPS", "SPAM"), Classification::Fair);
        assert_eq!(class("RIONY", "IRONY"), Classification::Fair);
        assert_eq!(class("ONYRI", "IRONY"), Classification::Hard);
        assert_eq!(class("IRONY", "IRONY"), Classification::Not);
        assert_eq!(class("INOYR", "IRONY"), Classification::Fair);
        assert_eq!(class("IOYRN", "IRONY"), Classification::Poor);
    }

    #[test]
    fn identity_is_not() {
        for word in ["A", "IRONY", "APPLE", "rhythm"] {
            assert_eq!(class(word, word), Classification::Not);
        }
        assert_eq!(class("irony", "IRONY"), Classification::Not);
    }

    #[test]
    fn different_letters_are_not() {
        assert_eq!(class("XYZ", "ABC"), Classification::Not);
        assert_eq!(class("ABCD", "ABC"), Classification::Not);
        assert_eq!(class("A", "B"), Classification::Not);
        assert_eq!(class("", "A"), Classification::Not);
    }

    #[test]
    fn empty_pair_is_not() {
        assert_eq!(class("", ""), Classification::Not);
    }

    #[test]
    fn poor_needs_overlap_and_unreal() {
        assert_eq!(class("RWOD", "WORD"), Classification::Poor);
        assert_eq!(class("ESTT", "TEST"), Classification::Poor);
        assert_eq!(class("ASCH", "CASH"), Classification::Poor);
    }

    #[test]
    fn hard_needs_real_and_no_matches() {
        assert_eq!(class("DROW", "WORD"), Classification::Hard);
        assert_eq!(class("OSCHA", "CHAOS"), Classification::Hard);
        assert_eq!(class("AB", "BA"), Classification::Hard);
    }

    #[test]
    fn fair_covers_the_rest() {
        // Doesn't look real, nothing in place
        assert_eq!(class("OWDR", "WORD"), Classification::Fair);
        assert_eq!(class("TS", "ST"), Classification::Fair);
        assert_eq!(class("ELPPA", "APPLE"), Classification::Fair);
        // Looks real, but something is in place
        assert_eq!(class("SETT", "TEST"), Classification::Fair);
        assert_eq!(class("OTHRAX", "THORAX"), Classification::Fair);
        // Looks real except for the trailing cluster
        assert_eq!(class("ABTHR", "BRATH"), Classification::Fair);
        assert_eq!(class("TSCHA", "CHATS"), Classification::Fair);
    }

    #[test]
    fn invalid_characters_are_errors() {
        assert!(classify("AB-", "BA-").is_err());
        assert!(classify("AB", "B A").is_err());
    }

    #[test]
    fn assessment_for_not() {
        let pair = ScramblePair::new("IRONY", "IRONY").unwrap();
        let a = assess(&pair);
        assert_eq!(a.not_reason, Some(NotReason::Identical));
        assert_eq!(a.looks_real, None);

        let pair = ScramblePair::new("IRONS", "IRONY").unwrap();
        assert_eq!(assess(&pair).not_reason, Some(NotReason::DifferentLetters));
    }

    #[test]
    fn assessment_evidence() {
        let pair = ScramblePair::new("INOYR", "IRONY").unwrap();
        let a = assess(&pair);
        assert_eq!(a.classification, Classification::Fair);
        assert_eq!(a.looks_real, Some(true));
        assert!(a.positional_overlap);
        assert_eq!(a.matching_positions, vec![0, 2]);
    }

    #[test]
    fn classification_is_repeatable() {
        let first = class("IOYRN", "IRONY");
        for _ in 0..3 {
            assert_eq!(class("IOYRN", "IRONY"), first);
        }
    }
}
