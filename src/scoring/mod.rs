//! Scramble scoring algorithms
//!
//! This module contains the word-likeness heuristic, the positional overlap checks and
//! the decision rule that combines them.

mod classifier;
pub mod looks_real;
pub mod overlap;

pub use classifier::{Assessment, NotReason, assess, classify};
pub use looks_real::{Segment, SegmentKind, Trace, looks_real, trace};
pub use overlap::{has_positional_overlap, matching_positions};
