//! Scramble/word pair representation
//!
//! A `ScramblePair` holds a scrambled letter sequence and the word it was drawn from,
//! both normalized to uppercase Latin letters.

use rustc_hash::FxHashMap;
use std::fmt;

/// Which side of a pair an input came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Scrambled,
    Word,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scrambled => write!(f, "scrambled"),
            Self::Word => write!(f, "word"),
        }
    }
}

/// Error type for invalid scramble inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// A character outside `A-Z`/`a-z` was found
    InvalidCharacter {
        side: Side,
        position: usize,
        character: char,
    },
}

impl fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter {
                side,
                position,
                character,
            } => write!(
                f,
                "Invalid argument: {side} contains {character:?} at position {position}, only letters A-Z are allowed"
            ),
        }
    }
}

impl std::error::Error for ScrambleError {}

/// A scrambled sequence paired with its source word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScramblePair {
    scrambled: String,
    word: String,
}

impl ScramblePair {
    /// Create a new pair, uppercasing both inputs
    ///
    /// Lengths are not required to match: a length mismatch simply fails the
    /// anagram check later.
    ///
    /// # Errors
    /// Returns `ScrambleError::InvalidCharacter` if either input contains anything
    /// other than the 26 Latin letters.
    ///
    /// # Examples
    /// ```
    /// use scramble_score::core::ScramblePair;
    ///
    /// let pair = ScramblePair::new("rwod", "word").unwrap();
    /// assert_eq!(pair.scrambled(), "RWOD");
    /// assert_eq!(pair.word(), "WORD");
    ///
    /// assert!(ScramblePair::new("rw0d", "word").is_err());
    /// ```
    pub fn new(scrambled: &str, word: &str) -> Result<Self, ScrambleError> {
        Ok(Self {
            scrambled: normalize(scrambled, Side::Scrambled)?,
            word: normalize(word, Side::Word)?,
        })
    }

    #[inline]
    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Check whether the scramble is the word itself
    #[inline]
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.scrambled == self.word
    }

    /// Check whether the scramble uses exactly the word's letters
    ///
    /// Compares letter-frequency multisets, so pairs of differing length are never anagrams.
    #[must_use]
    pub fn is_anagram(&self) -> bool {
        self.scrambled.len() == self.word.len()
            && letter_counts(&self.scrambled) == letter_counts(&self.word)
    }
}

impl fmt::Display for ScramblePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scrambled, self.word)
    }
}

/// Count occurrences of each letter
#[must_use]
pub fn letter_counts(text: &str) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for &letter in text.as_bytes() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

fn normalize(text: &str, side: Side) -> Result<String, ScrambleError> {
    if let Some((position, character)) = text
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_alphabetic())
    {
        return Err(ScrambleError::InvalidCharacter {
            side,
            position,
            character,
        });
    }

    Ok(text.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_uppercased() {
        let pair = ScramblePair::new("IrOnY", "irony").unwrap();
        assert_eq!(pair.scrambled(), "IRONY");
        assert_eq!(pair.word(), "IRONY");
    }

    #[test]
    fn pair_rejects_non_letters() {
        assert_eq!(
            ScramblePair::new("AB1", "BA1"),
            Err(ScrambleError::InvalidCharacter {
                side: Side::Scrambled,
                position: 2,
                character: '1',
            })
        );
        assert!(matches!(
            ScramblePair::new("ABC", "CA B"),
            Err(ScrambleError::InvalidCharacter {
                side: Side::Word,
                position: 2,
                character: ' ',
            })
        ));
        assert!(ScramblePair::new("ÉTÉ", "TÉÉ").is_err());
    }

    #[test]
    fn empty_inputs_are_allowed() {
        let pair = ScramblePair::new("", "").unwrap();
        assert!(pair.is_identical());
        assert!(pair.is_anagram());
    }

    #[test]
    fn identity_is_case_insensitive() {
        assert!(ScramblePair::new("Irony", "IRONY").unwrap().is_identical());
        assert!(!ScramblePair::new("RIONY", "IRONY").unwrap().is_identical());
    }

    #[test]
    fn anagram_compares_multisets() {
        assert!(ScramblePair::new("MAPS", "SPAM").unwrap().is_anagram());
        assert!(ScramblePair::new("ELPPA", "APPLE").unwrap().is_anagram());
        assert!(!ScramblePair::new("ELPA", "APPLE").unwrap().is_anagram());
        assert!(!ScramblePair::new("ELPAA", "APPLE").unwrap().is_anagram());
        assert!(!ScramblePair::new("XYZ", "ABC").unwrap().is_anagram());
    }

    #[test]
    fn letter_counts_tracks_duplicates() {
        let counts = letter_counts("APPLE");
        assert_eq!(counts.get(&b'P'), Some(&2));
        assert_eq!(counts.get(&b'A'), Some(&1));
        assert_eq!(counts.get(&b'Z'), None);
    }

    #[test]
    fn error_display_names_the_side() {
        let err = ScramblePair::new("ok", "n-o").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("word"));
        assert!(text.contains("'-'"));
        assert!(text.contains("position 1"));
    }
}
