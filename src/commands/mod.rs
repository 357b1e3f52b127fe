//! Command implementations

pub mod analyze;
pub mod batch;
pub mod generate;
pub mod score;

pub use analyze::{AnalysisResult, analyze_pair};
pub use batch::{BatchConfig, BatchReport, BatchSummary, Outcome, RecordOutcome, run_batch};
pub use generate::{GenerateConfig, GenerateResult, generate_scrambles};
pub use score::{ScoreResult, score_pair, score_validated};
