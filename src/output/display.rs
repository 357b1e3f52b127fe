//! Display functions for command results

use super::formatters::{
    create_progress_bar, position_marks, segment_kind_name, segmentation, self_test_line,
};
use crate::commands::{AnalysisResult, BatchSummary, GenerateResult, Outcome, RecordOutcome};
use crate::core::Classification;
use crate::scoring::NotReason;
use colored::{ColoredString, Colorize};

/// Colour a label the way every view shows it
#[must_use]
pub fn colored_label(classification: Classification) -> ColoredString {
    let label = classification.label();
    match classification {
        Classification::Not => label.bright_black(),
        Classification::Poor => label.red(),
        Classification::Fair => label.yellow(),
        Classification::Hard => label.green(),
    }
}

/// Print one batch outcome
///
/// Results go to stdout exactly as rendered; skipped lines are reported on stderr.
pub fn print_outcome(outcome: &RecordOutcome) {
    match &outcome.outcome {
        Outcome::Scored {
            message,
            verdict: None,
            ..
        } => println!("{message}"),
        Outcome::Scored {
            message,
            verdict: Some(passed),
            ..
        } => println!("{}", self_test_line(message, *passed)),
        Outcome::Skipped(e) => print_warning(&format!(
            "skipping line {} ({:?}): {e}",
            outcome.line, outcome.text
        )),
    }
}

/// Print a warning to stderr
pub fn print_warning(text: &str) {
    eprintln!("{} {text}", "warning:".yellow().bold());
}

/// Print the totals of a batch run
pub fn print_batch_summary(summary: &BatchSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Records:".bright_cyan().bold());
    println!("   Lines read:       {}", summary.total);
    println!("   Scored:           {}", summary.scored());
    if summary.skipped > 0 {
        println!("   Skipped:          {}", summary.skipped.to_string().yellow());
    }
    println!("   Time taken:       {:.3}s", summary.duration.as_secs_f64());

    print_distribution(&summary.counts, summary.scored());

    if summary.passed + summary.failed > 0 {
        println!("\n🧪 {}", "Self-tests:".bright_cyan().bold());
        println!(
            "   Passed:           {}",
            summary.passed.to_string().green()
        );
        let failed = summary.failed.to_string();
        println!(
            "   Failed:           {}",
            if summary.failed > 0 {
                failed.red().bold()
            } else {
                failed.normal()
            }
        );
    }
}

/// Print the result of a scramble analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let assessment = &result.assessment;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} {} {} ",
        "SCRAMBLE ANALYSIS:".bright_cyan().bold(),
        result.pair.scrambled().bright_yellow().bold(),
        "vs".bright_black(),
        result.pair.word().bright_white().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🏷  Verdict:   {} ({})",
        result.message,
        colored_label(assessment.classification).bold()
    );

    match assessment.not_reason {
        Some(NotReason::Identical) => println!("   Reason:    scramble is the word itself"),
        Some(NotReason::DifferentLetters) => {
            println!("   Reason:    scramble does not use exactly the word's letters");
        }
        None => {}
    }

    println!("\n🔤 {}", "Looks real:".bright_cyan().bold());
    let looks_real = if result.trace.looks_real() {
        "yes".green()
    } else {
        "no".red()
    };
    println!("   Result:    {looks_real}");
    println!(
        "   Segments:  {}",
        segmentation(result.pair.scrambled(), &result.trace)
    );
    for segment in &result.trace.segments {
        println!(
            "     {:<4} {}",
            segment.text(result.pair.scrambled()),
            segment_kind_name(segment.kind, segment.class).bright_black()
        );
    }
    if let Some((position, expected)) = result.trace.failure {
        println!(
            "   Failed at position {position}: expected a {}",
            expected.name()
        );
    }

    if assessment.not_reason.is_none() {
        println!("\n📍 {}", "Letters in place:".bright_cyan().bold());
        println!(
            "   Word:      {}\n   Scramble:  {}\n   In place:  {}",
            result.pair.word(),
            result.pair.scrambled(),
            position_marks(result.pair.scrambled(), &assessment.matching_positions)
        );
        println!(
            "   Overlap:   {}",
            if assessment.positional_overlap {
                "first letter or a consecutive pair in place".yellow()
            } else {
                "none".green()
            }
        );
    }
}

/// Print the result of a generation run
pub fn print_generate_result(result: &GenerateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "RANDOM SCRAMBLES OF".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🎲 Samples:         {}", result.samples);
    println!("   Distinct:        {}", result.unique);
    println!("   Time taken:      {:.3}s", result.duration.as_secs_f64());

    print_distribution(&result.counts, result.samples);

    println!("\n✨ {}", "Examples:".bright_cyan().bold());
    for classification in Classification::ALL {
        if let Some(example) = result.example(classification) {
            println!(
                "   {:<5} {}",
                colored_label(classification),
                example.bright_white()
            );
        }
    }
}

fn print_distribution(counts: &[usize; 4], total: usize) {
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for classification in Classification::ALL {
        let count = counts[classification.index()];
        let pct = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, total as f64, 40);
        println!(
            "   {:<5}: {} {count:6} ({pct:5.1}%)",
            classification.label(),
            bar.green()
        );
    }
}
