//! Formatting utilities for scramble results

use crate::core::{Classification, LetterClass, ScramblePair};
use crate::scoring::{SegmentKind, Trace};

/// Tag appended to a passing self-test line
pub const TEST_PASSED: &str = "TEST PASSED";

/// Tag appended to a failing self-test line
pub const TEST_FAILED: &str = "** TEST FAILED **";

/// Render the result message for a classified pair
///
/// # Examples
/// ```
/// use scramble_score::core::{Classification, ScramblePair};
/// use scramble_score::output::formatters::message;
///
/// let pair = ScramblePair::new("maps", "spam").unwrap();
/// assert_eq!(message(&pair, Classification::Fair), "MAPS is a fair scramble of SPAM");
/// assert_eq!(message(&pair, Classification::Not), "MAPS is not a scramble of SPAM");
/// ```
#[must_use]
pub fn message(pair: &ScramblePair, classification: Classification) -> String {
    let (scrambled, word) = (pair.scrambled(), pair.word());
    match classification {
        Classification::Not => format!("{scrambled} is not a scramble of {word}"),
        other => format!("{scrambled} is a {} scramble of {word}", other.label()),
    }
}

/// Render a self-test result line
#[must_use]
pub fn self_test_line(message: &str, passed: bool) -> String {
    let tag = if passed { TEST_PASSED } else { TEST_FAILED };
    format!("{message}\t[ {tag} ]")
}

/// Show how the alternation scan split a scramble, e.g. `O·SCH·A`
///
/// Unconsumed letters after a failure are shown after a `✗`.
#[must_use]
pub fn segmentation(text: &str, trace: &Trace) -> String {
    let parts: Vec<&str> = trace.segments.iter().map(|s| s.text(text)).collect();
    let consumed: usize = trace.segments.iter().map(|s| s.len).sum();

    let mut result = parts.join("·");
    if trace.failure.is_some() && consumed < text.len() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push('✗');
        result.push(' ');
        result.push_str(&text[consumed..]);
    }
    result
}

/// Short description of a segment kind
#[must_use]
pub const fn segment_kind_name(kind: SegmentKind, class: LetterClass) -> &'static str {
    match (kind, class) {
        (SegmentKind::Single, LetterClass::Vowel) => "vowel",
        (SegmentKind::Single, LetterClass::Consonant) => "consonant",
        (SegmentKind::Digraph, LetterClass::Vowel) => "vowel pair",
        (SegmentKind::Digraph, LetterClass::Consonant) => "consonant pair",
        (SegmentKind::Trigraph, _) => "consonant triple",
        (SegmentKind::Double, _) => "double consonant",
    }
}

/// Mark letters in their original place, e.g. `I_O__` for INOYR vs IRONY
#[must_use]
pub fn position_marks(scrambled: &str, matches: &[usize]) -> String {
    scrambled
        .chars()
        .enumerate()
        .map(|(i, c)| if matches.contains(&i) { c } else { '_' })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
