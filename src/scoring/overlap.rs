//! Positional overlap between a word and its scramble
//!
//! Letters left in their original place make a scramble easier to solve.

/// Check whether too much position information survived scrambling
///
/// True when the first letters match, or when for any index `i >= 1` the two-letter
/// windows starting at `i` are equal. Windows are clipped at the end of the input, so
/// the last index compares a single trailing letter: a scramble that keeps the last
/// letter in place overlaps too.
///
/// # Examples
/// ```
/// use scramble_score::scoring::has_positional_overlap;
///
/// assert!(has_positional_overlap("IRONY", "IOYRN")); // first letter
/// assert!(has_positional_overlap("IRONY", "RIONY")); // "ON" at index 2
/// assert!(has_positional_overlap("WORD", "RWOD")); // trailing "D"
/// assert!(!has_positional_overlap("IRONY", "YOINR"));
/// ```
#[must_use]
pub fn has_positional_overlap(word: &str, scrambled: &str) -> bool {
    let word = word.as_bytes();
    let scrambled = scrambled.as_bytes();

    match (word.first(), scrambled.first()) {
        (Some(a), Some(b)) if a == b => return true,
        (Some(_), Some(_)) => {}
        _ => return false,
    }

    (1..word.len()).any(|i| pair_at(word, i) == pair_at(scrambled, i))
}

/// Indices where the scramble has the word's letter
#[must_use]
pub fn matching_positions(word: &str, scrambled: &str) -> Vec<usize> {
    word.bytes()
        .zip(scrambled.bytes())
        .enumerate()
        .filter_map(|(i, (a, b))| (a == b).then_some(i))
        .collect()
}

/// Up to two letters starting at `i`, clipped to the input
fn pair_at(letters: &[u8], i: usize) -> &[u8] {
    let start = i.min(letters.len());
    let end = (i + 2).min(letters.len());
    &letters[start..end]
}
