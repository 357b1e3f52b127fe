//! Record loading utilities
//!
//! Reads scramble records from files or any buffered reader, keeping line numbers
//! so bad lines can be reported.

use super::{Record, RecordError, parse_line};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A non-blank input line, parsed or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number
    pub number: usize,
    pub text: String,
    pub record: Result<Record, RecordError>,
}

/// Read every non-blank line from a reader
///
/// # Errors
///
/// Returns an I/O error if reading fails. Lines that fail to parse are kept
/// with their error.
///
/// # Examples
/// ```
/// use scramble_score::records::loader::read_records;
///
/// let input = "MAPS SPAM\n\nIRONY IRONY not\nbad\n";
/// let lines = read_records(input.as_bytes()).unwrap();
///
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[1].number, 3);
/// assert!(lines[2].record.is_err());
/// ```
pub fn read_records<R: BufRead>(reader: R) -> io::Result<Vec<Line>> {
    let mut lines = Vec::new();

    for (idx, text) in reader.lines().enumerate() {
        let text = text?;
        let record = match parse_line(&text) {
            Ok(Some(record)) => Ok(record),
            Ok(None) => continue,
            Err(e) => Err(e),
        };

        lines.push(Line {
            number: idx + 1,
            text: text.trim().to_string(),
            record,
        });
    }

    Ok(lines)
}

/// Read records from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Line>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;

    #[test]
    fn read_mixed_records() {
        let input = "MAPS SPAM\nONYRI IRONY HARD\n";
        let lines = read_records(input.as_bytes()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[0].record.as_ref().unwrap().expected(), None);
        assert_eq!(
            lines[1].record.as_ref().unwrap().expected(),
            Some(&Ok(Classification::Hard))
        );
    }

    #[test]
    fn read_skips_blank_lines() {
        let input = "\n\n  \nMAPS SPAM\n";
        let lines = read_records(input.as_bytes()).unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].number, 4);
        assert_eq!(lines[0].text, "MAPS SPAM");
    }

    #[test]
    fn read_keeps_bad_lines() {
        let input = "MAPS\nMAPS SPAM poorly\n";
        let lines = read_records(input.as_bytes()).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].record, Err(RecordError::FieldCount(1)));
        assert!(lines[1].record.is_ok());
    }

    #[test]
    fn read_empty() {
        let lines = read_records("".as_bytes()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn load_missing_file() {
        assert!(load_from_file("/nonexistent/scrambles.txt").is_err());
    }
}
