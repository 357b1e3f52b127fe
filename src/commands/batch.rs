//! Batch scoring command
//!
//! Scores every record of an input in parallel, checking self-test records against
//! their expected label.

use super::score::score_validated;
use crate::core::Classification;
use crate::records::RecordError;
use crate::records::loader::Line;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Inputs with fewer records than this never show a progress bar
const PROGRESS_THRESHOLD: usize = 10_000;

/// Options for a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Worker threads (0 = one per core)
    pub jobs: usize,
    /// Show a progress bar on stderr for large inputs
    pub show_progress: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            jobs: 0,
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// What happened to one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Scored {
        classification: Classification,
        message: String,
        /// `Some(passed)` for self-test records
        verdict: Option<bool>,
    },
    Skipped(RecordError),
}

/// Outcome of one input line, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub line: usize,
    pub text: String,
    pub outcome: Outcome,
}

/// Totals over a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    /// Indexed by `Classification::index`
    pub counts: [usize; 4],
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration: Duration,
}

impl BatchSummary {
    #[must_use]
    pub const fn count(&self, classification: Classification) -> usize {
        self.counts[classification.index()]
    }

    #[must_use]
    pub const fn scored(&self) -> usize {
        self.total - self.skipped
    }

    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Results of a batch run
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
    pub summary: BatchSummary,
}

/// Score every line
///
/// Lines that failed to parse are carried through as skipped outcomes.
///
/// # Errors
///
/// Returns an error if the worker pool or progress bar cannot be set up.
pub fn run_batch(lines: &[Line], config: BatchConfig) -> Result<BatchReport> {
    let start = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .context("Failed to start worker threads")?;

    let pb = if config.show_progress && lines.len() >= PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<RecordOutcome> = pool.install(|| {
        lines
            .par_iter()
            .map(|line| {
                let outcome = score_line(line);
                pb.inc(1);
                outcome
            })
            .collect()
    });

    pb.finish_with_message("Complete!");

    let mut summary = summarize(&outcomes);
    summary.duration = start.elapsed();

    Ok(BatchReport { outcomes, summary })
}

fn score_line(line: &Line) -> RecordOutcome {
    let outcome = match &line.record {
        Ok(record) => {
            let result = score_validated(record.pair().clone());
            Outcome::Scored {
                classification: result.classification,
                message: result.message,
                verdict: record.verdict(result.classification),
            }
        }
        Err(e) => Outcome::Skipped(e.clone()),
    };

    RecordOutcome {
        line: line.number,
        text: line.text.clone(),
        outcome,
    }
}

fn summarize(outcomes: &[RecordOutcome]) -> BatchSummary {
    let mut summary = BatchSummary {
        total: outcomes.len(),
        ..BatchSummary::default()
    };

    for outcome in outcomes {
        match &outcome.outcome {
            Outcome::Scored {
                classification,
                verdict,
                ..
            } => {
                summary.counts[classification.index()] += 1;
                match verdict {
                    Some(true) => summary.passed += 1,
                    Some(false) => summary.failed += 1,
                    None => {}
                }
            }
            Outcome::Skipped(_) => summary.skipped += 1,
        }
    }

    summary
}
