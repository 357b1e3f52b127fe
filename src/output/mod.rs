//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    colored_label, print_analysis_result, print_batch_summary, print_generate_result,
    print_outcome, print_warning,
};
