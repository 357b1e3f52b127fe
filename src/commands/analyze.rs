//! Scramble analysis command
//!
//! Explains why a scramble got its label.

use crate::core::{ScrambleError, ScramblePair};
use crate::output::formatters::message;
use crate::scoring::{Assessment, Trace, assess, trace};

/// Result of analyzing a scramble
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub pair: ScramblePair,
    pub assessment: Assessment,
    /// Alternation scan of the scrambled letters
    pub trace: Trace,
    pub message: String,
}

/// Analyze a scramble against its word
///
/// The alternation scan is always run, even when the pair is not a scramble.
///
/// # Errors
///
/// Returns an error if either input contains non-letter characters.
pub fn analyze_pair(scrambled: &str, word: &str) -> Result<AnalysisResult, ScrambleError> {
    let pair = ScramblePair::new(scrambled, word)?;
    let assessment = assess(&pair);
    let trace = trace(pair.scrambled());
    let message = message(&pair, assessment.classification);

    Ok(AnalysisResult {
        pair,
        assessment,
        trace,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;
    use crate::scoring::NotReason;

    #[test]
    fn analyze_poor() {
        let result = analyze_pair("IOYRN", "IRONY").unwrap();

        assert_eq!(result.assessment.classification, Classification::Poor);
        assert_eq!(result.assessment.looks_real, Some(false));
        assert!(result.assessment.positional_overlap);
        assert!(!result.trace.looks_real());
        assert_eq!(result.message, "IOYRN is a poor scramble of IRONY");
    }

    #[test]
    fn analyze_trace_agrees_with_assessment() {
        for (scrambled, word) in [("MAPS", "SPAM"), ("ONYRI", "IRONY"), ("OSCHA", "CHAOS")] {
            let result = analyze_pair(scrambled, word).unwrap();
            assert_eq!(
                result.assessment.looks_real,
                Some(result.trace.looks_real())
            );
        }
    }

    #[test]
    fn analyze_not_still_traces() {
        let result = analyze_pair("IRONY", "IRONY").unwrap();
        assert_eq!(result.assessment.not_reason, Some(NotReason::Identical));
        assert!(result.trace.looks_real());
        assert!(!result.trace.segments.is_empty());
    }

    #[test]
    fn analyze_invalid() {
        assert!(analyze_pair("IRONY", "IRONY!").is_err());
    }
}
