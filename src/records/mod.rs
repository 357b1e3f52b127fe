//! Input records for batch scoring
//!
//! Each line of input is one record:
//! - `SCRAMBLE WORD` asks for a score
//! - `SCRAMBLE WORD EXPECTED` checks the score against an expected label

pub mod loader;

use crate::core::{Classification, ScrambleError, ScramblePair, UnknownLabel};
use std::fmt;

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Score a pair
    Request(ScramblePair),
    /// Score a pair and compare against the expected label
    ///
    /// An unrecognised label is kept so the line can still be scored and
    /// reported as failed.
    SelfTest {
        pair: ScramblePair,
        expected: Result<Classification, UnknownLabel>,
    },
}

impl Record {
    #[must_use]
    pub const fn pair(&self) -> &ScramblePair {
        match self {
            Self::Request(pair) | Self::SelfTest { pair, .. } => pair,
        }
    }

    #[must_use]
    pub const fn expected(&self) -> Option<&Result<Classification, UnknownLabel>> {
        match self {
            Self::Request(_) => None,
            Self::SelfTest { expected, .. } => Some(expected),
        }
    }

    /// Compare a score against the expected label
    ///
    /// `None` for requests. An unrecognised label never passes.
    #[must_use]
    pub fn verdict(&self, classification: Classification) -> Option<bool> {
        self.expected()
            .map(|expected| expected.as_ref().is_ok_and(|&e| e == classification))
    }
}

/// Error type for lines that can't be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Neither two nor three fields
    FieldCount(usize),
    /// The scramble or word has invalid characters
    Scramble(ScrambleError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(
                f,
                "Expected 'SCRAMBLE WORD' or 'SCRAMBLE WORD EXPECTED', got {n} fields"
            ),
            Self::Scramble(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FieldCount(_) => None,
            Self::Scramble(e) => Some(e),
        }
    }
}

impl From<ScrambleError> for RecordError {
    fn from(e: ScrambleError) -> Self {
        Self::Scramble(e)
    }
}

/// Parse one line of input
///
/// Blank lines yield `Ok(None)`.
///
/// # Errors
/// Returns `RecordError` if the line has the wrong number of fields or non-letter
/// characters. An unknown expected label is not an error; see [`Record::verdict`].
///
/// # Examples
/// ```
/// use scramble_score::core::Classification;
/// use scramble_score::records::{Record, parse_line};
///
/// let record = parse_line("IOYRN IRONY poor").unwrap().unwrap();
/// assert_eq!(record.expected(), Some(&Ok(Classification::Poor)));
/// assert_eq!(record.verdict(Classification::Poor), Some(true));
///
/// assert!(parse_line("   ").unwrap().is_none());
/// assert!(parse_line("IRONY").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Option<Record>, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    match fields.as_slice() {
        [] => Ok(None),
        [scrambled, word] => Ok(Some(Record::Request(ScramblePair::new(scrambled, word)?))),
        [scrambled, word, expected] => Ok(Some(Record::SelfTest {
            pair: ScramblePair::new(scrambled, word)?,
            expected: expected.parse(),
        })),
        other => Err(RecordError::FieldCount(other.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request() {
        let record = parse_line("maps spam").unwrap().unwrap();
        assert_eq!(
            record,
            Record::Request(ScramblePair::new("MAPS", "SPAM").unwrap())
        );
        assert_eq!(record.expected(), None);
        assert_eq!(record.pair().scrambled(), "MAPS");
    }

    #[test]
    fn parse_self_test() {
        let record = parse_line("ONYRI\tIRONY  HARD\n").unwrap().unwrap();
        assert_eq!(record.expected(), Some(&Ok(Classification::Hard)));
        assert_eq!(record.pair().word(), "IRONY");
        assert_eq!(record.verdict(Classification::Hard), Some(true));
        assert_eq!(record.verdict(Classification::Fair), Some(false));
    }

    #[test]
    fn parse_blank() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line(" \t "), Ok(None));
    }

    #[test]
    fn parse_wrong_field_count() {
        assert_eq!(parse_line("IRONY"), Err(RecordError::FieldCount(1)));
        assert_eq!(parse_line("A B C D"), Err(RecordError::FieldCount(4)));
    }

    #[test]
    fn unknown_label_is_kept_and_never_passes() {
        let record = parse_line("RIONY IRONY easy").unwrap().unwrap();
        assert_eq!(
            record.expected(),
            Some(&Err(UnknownLabel("easy".to_string())))
        );
        for classification in Classification::ALL {
            assert_eq!(record.verdict(classification), Some(false));
        }
    }

    #[test]
    fn request_has_no_verdict() {
        let record = parse_line("MAPS SPAM").unwrap().unwrap();
        assert_eq!(record.verdict(Classification::Fair), None);
    }

    #[test]
    fn parse_invalid_letters() {
        assert!(matches!(
            parse_line("R10NY IRONY"),
            Err(RecordError::Scramble(_))
        ));
    }
}
