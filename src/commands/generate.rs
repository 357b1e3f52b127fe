//! Random scramble generation
//!
//! Shuffles a word many times and reports how the shuffles score.

use crate::core::{Classification, ScrambleError, ScramblePair};
use crate::scoring::assess;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Options for a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Number of shuffles to draw
    pub count: usize,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub word: String,
    pub samples: usize,
    /// Indexed by `Classification::index`
    pub counts: [usize; 4],
    /// First scramble drawn for each label
    pub examples: [Option<String>; 4],
    /// Distinct scrambles drawn
    pub unique: usize,
    pub duration: Duration,
}

impl GenerateResult {
    #[must_use]
    pub const fn count(&self, classification: Classification) -> usize {
        self.counts[classification.index()]
    }

    #[must_use]
    pub fn example(&self, classification: Classification) -> Option<&str> {
        self.examples[classification.index()].as_deref()
    }
}

/// Draw random shuffles of a word and classify each
///
/// A shuffle that happens to reproduce the word counts as `not`.
///
/// # Errors
///
/// Returns an error if the word contains non-letter characters.
pub fn generate_scrambles(
    word: &str,
    config: GenerateConfig,
) -> Result<GenerateResult, ScrambleError> {
    let start = Instant::now();
    let word = ScramblePair::new(word, word)?.word().to_string();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut counts = [0usize; 4];
    let mut examples: [Option<String>; 4] = Default::default();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut letters: Vec<char> = word.chars().collect();

    for _ in 0..config.count {
        letters.shuffle(&mut rng);
        let scrambled: String = letters.iter().collect();

        let pair = ScramblePair::new(&scrambled, &word)?;
        let classification = assess(&pair).classification;

        counts[classification.index()] += 1;
        examples[classification.index()].get_or_insert_with(|| scrambled.clone());
        seen.insert(scrambled);
    }

    Ok(GenerateResult {
        word,
        samples: config.count,
        counts,
        examples,
        unique: seen.len(),
        duration: start.elapsed(),
    })
}
