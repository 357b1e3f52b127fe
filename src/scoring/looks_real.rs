//! Word-likeness heuristic
//!
//! A scramble looks like a real word when its letters alternate between vowels and
//! consonants. Allowed vowel pairs, consonant clusters and doubled consonants may
//! stand in for a single letter of their class.
//!
//! # Algorithm
//! 1. Expect the class of the first letter
//! 2. Check the letter at the cursor is of the expected class, otherwise fail
//! 3. Consume the longest allowed cluster starting at the cursor (or one letter)
//! 4. Flip the expected class and repeat until the end
//!
//! Cluster windows never read past the end of the input. The consonant windows keep
//! strict bounds: a trigraph is only consumed with at least one letter after it, and a
//! consonant digraph likewise, so `ATHR` and `AST` do not look real while `ATHRA` and
//! `ASTA` do.

use crate::core::LetterClass;
use crate::core::letters::{
    is_consonant, is_consonant_digraph, is_consonant_trigraph, is_vowel, is_vowel_digraph,
};

/// How a segment was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A lone letter
    Single,
    /// An allowed vowel pair or consonant cluster of two letters
    Digraph,
    /// An allowed consonant cluster of three letters
    Trigraph,
    /// A doubled consonant
    Double,
}

/// One step of the alternation scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub len: usize,
    pub class: LetterClass,
    pub kind: SegmentKind,
}

impl Segment {
    /// The letters this segment covers
    ///
    /// # Panics
    /// Panics if `text` is not the string the segment was traced from.
    #[must_use]
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.start + self.len]
    }
}

/// Full record of an alternation scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    /// Segments consumed before the scan ended
    pub segments: Vec<Segment>,
    /// Position and expected class where the scan failed, if it did
    pub failure: Option<(usize, LetterClass)>,
}

impl Trace {
    #[inline]
    #[must_use]
    pub const fn looks_real(&self) -> bool {
        self.failure.is_none()
    }
}

/// Check whether a letter sequence looks like a real word
///
/// Case is ignored.
///
/// # Examples
/// ```
/// use scramble_score::scoring::looks_real;
///
/// assert!(looks_real("ONYRI"));
/// assert!(looks_real("onyri"));
/// assert!(looks_real("SCHA"));
/// assert!(!looks_real("IOYRN"));
/// ```
#[must_use]
pub fn looks_real(text: &str) -> bool {
    trace(text).looks_real()
}

/// Run the alternation scan, recording every consumed segment
#[must_use]
pub fn trace(text: &str) -> Trace {
    let upper = text.to_ascii_uppercase();
    let letters = upper.as_bytes();
    let mut result = Trace::default();

    let Some(&first) = letters.first() else {
        return result;
    };

    let mut expected = if is_vowel(first) {
        LetterClass::Vowel
    } else {
        LetterClass::Consonant
    };

    let mut i = 0;
    while i < letters.len() {
        let step = match expected {
            LetterClass::Vowel => vowel_step(letters, i),
            LetterClass::Consonant => consonant_step(letters, i),
        };

        let Some((len, kind)) = step else {
            result.failure = Some((i, expected));
            return result;
        };

        result.segments.push(Segment {
            start: i,
            len,
            class: expected,
            kind,
        });
        i += len;
        expected = expected.other();
    }

    result
}

fn vowel_step(letters: &[u8], i: usize) -> Option<(usize, SegmentKind)> {
    if !is_vowel(letters[i]) {
        return None;
    }

    if i + 2 <= letters.len() && is_vowel_digraph(&letters[i..i + 2]) {
        Some((2, SegmentKind::Digraph))
    } else {
        Some((1, SegmentKind::Single))
    }
}

fn consonant_step(letters: &[u8], i: usize) -> Option<(usize, SegmentKind)> {
    if !is_consonant(letters[i]) {
        return None;
    }

    let n = letters.len();
    if i + 3 < n && is_consonant_trigraph(&letters[i..i + 3]) {
        Some((3, SegmentKind::Trigraph))
    } else if i + 2 < n && is_consonant_digraph(&letters[i..i + 2]) {
        Some((2, SegmentKind::Digraph))
    } else if i + 1 < n && letters[i] == letters[i + 1] {
        Some((2, SegmentKind::Double))
    } else {
        Some((1, SegmentKind::Single))
    }
}
