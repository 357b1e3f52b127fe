//! Scramble difficulty labels

use std::fmt;
use std::str::FromStr;

/// Difficulty of unscrambling a scramble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Not scrambled at all, or not made of the word's letters
    Not,
    /// Easy to solve
    Poor,
    /// Reasonable difficulty
    Fair,
    /// Hard to solve
    Hard,
}

/// Error for an unrecognised difficulty label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown difficulty '{}', expected one of: not, poor, fair, hard",
            self.0
        )
    }
}

impl std::error::Error for UnknownLabel {}

impl Classification {
    /// Every label, in decision order
    pub const ALL: [Self; 4] = [Self::Not, Self::Poor, Self::Fair, Self::Hard];

    /// Lowercase label used in messages
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Hard => "hard",
        }
    }

    /// Index into `ALL`, handy for per-label counters
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Classification {
    type Err = UnknownLabel;

    /// Parse a label in any case
    ///
    /// # Examples
    /// ```
    /// use scramble_score::core::Classification;
    ///
    /// assert_eq!("HARD".parse(), Ok(Classification::Hard));
    /// assert!("easy".parse::<Classification>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
