//! Letter classes and the allowed letter-cluster tables
//!
//! A scramble "looks real" when vowels and consonants alternate, except for the
//! clusters listed here. All tables are compile-time constants over uppercase ASCII.

/// Vowel letters (`Y` always counts as a vowel)
pub const VOWELS: &[u8; 6] = b"AEIOUY";

/// Consonant letters
pub const CONSONANTS: &[u8; 20] = b"BCDFGHJKLMNPQRSTVWXZ";

/// Vowel pairs that may appear together
pub const VOWEL_DIGRAPHS: &[&[u8; 2]] = &[
    b"AI", b"AY", b"EA", b"EE", b"EO", b"IO", b"OA", b"OO", b"OY", b"YA", b"YO", b"YU",
];

/// Two-letter consonant clusters that may appear together
pub const CONSONANT_DIGRAPHS: &[&[u8; 2]] = &[
    b"BL", b"BR", b"CH", b"CK", b"CL", b"CR", b"DR", b"FL", b"FR", b"GH", b"GL", b"GR", b"KL",
    b"KR", b"KW", b"PF", b"PL", b"PR", b"SC", b"SH", b"SK", b"SL", b"SM", b"SN", b"SP", b"SQ",
    b"ST", b"SW", b"TH", b"TR", b"TW", b"WH", b"WR",
];

/// Three-letter consonant clusters that may appear together
pub const CONSONANT_TRIGRAPHS: &[&[u8; 3]] = &[b"SCH", b"SCR", b"SHR", b"THR"];

/// Vowel or consonant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

impl LetterClass {
    /// Classify an ASCII letter (either case)
    ///
    /// Returns `None` for anything outside `A-Z`/`a-z`.
    ///
    /// # Examples
    /// ```
    /// use scramble_score::core::LetterClass;
    ///
    /// assert_eq!(LetterClass::of(b'y'), Some(LetterClass::Vowel));
    /// assert_eq!(LetterClass::of(b'K'), Some(LetterClass::Consonant));
    /// assert_eq!(LetterClass::of(b'-'), None);
    /// ```
    #[must_use]
    pub fn of(letter: u8) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        if VOWELS.contains(&upper) {
            Some(Self::Vowel)
        } else if CONSONANTS.contains(&upper) {
            Some(Self::Consonant)
        } else {
            None
        }
    }

    /// The class expected after this one in a strictly alternating word
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Vowel => Self::Consonant,
            Self::Consonant => Self::Vowel,
        }
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vowel => "vowel",
            Self::Consonant => "consonant",
        }
    }
}

/// Check whether an uppercase letter is a vowel
#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter)
}

/// Check whether an uppercase letter is a consonant
#[inline]
#[must_use]
pub fn is_consonant(letter: u8) -> bool {
    CONSONANTS.contains(&letter)
}

/// Check a two-letter window against the vowel digraph table
#[must_use]
pub fn is_vowel_digraph(window: &[u8]) -> bool {
    VOWEL_DIGRAPHS.iter().any(|pair| pair.as_slice() == window)
}

/// Check a two-letter window against the consonant digraph table
#[must_use]
pub fn is_consonant_digraph(window: &[u8]) -> bool {
    CONSONANT_DIGRAPHS
        .iter()
        .any(|pair| pair.as_slice() == window)
}

/// Check a three-letter window against the consonant trigraph table
#[must_use]
pub fn is_consonant_trigraph(window: &[u8]) -> bool {
    CONSONANT_TRIGRAPHS
        .iter()
        .any(|triple| triple.as_slice() == window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_partitioned() {
        for letter in b'A'..=b'Z' {
            assert_ne!(
                is_vowel(letter),
                is_consonant(letter),
                "{} must be exactly one class",
                letter as char
            );
        }
        assert_eq!(VOWELS.len() + CONSONANTS.len(), 26);
    }

    #[test]
    fn y_is_a_vowel() {
        assert!(is_vowel(b'Y'));
        assert!(!is_consonant(b'Y'));
    }

    #[test]
    fn letter_class_is_case_insensitive() {
        assert_eq!(LetterClass::of(b'a'), Some(LetterClass::Vowel));
        assert_eq!(LetterClass::of(b'A'), Some(LetterClass::Vowel));
        assert_eq!(LetterClass::of(b'z'), Some(LetterClass::Consonant));
        assert_eq!(LetterClass::of(b'0'), None);
        assert_eq!(LetterClass::of(b' '), None);
    }

    #[test]
    fn other_flips_class() {
        assert_eq!(LetterClass::Vowel.other(), LetterClass::Consonant);
        assert_eq!(LetterClass::Consonant.other(), LetterClass::Vowel);
    }

    #[test]
    fn table_sizes() {
        assert_eq!(VOWEL_DIGRAPHS.len(), 12);
        assert_eq!(CONSONANT_DIGRAPHS.len(), 33);
        assert_eq!(CONSONANT_TRIGRAPHS.len(), 4);
    }

    #[test]
    fn digraph_tables_hold_the_right_classes() {
        for pair in VOWEL_DIGRAPHS {
            assert!(pair.iter().all(|&l| is_vowel(l)));
        }
        for pair in CONSONANT_DIGRAPHS {
            assert!(pair.iter().all(|&l| is_consonant(l)));
        }
        for triple in CONSONANT_TRIGRAPHS {
            assert!(triple.iter().all(|&l| is_consonant(l)));
        }
    }

    #[test]
    fn cluster_lookups() {
        assert!(is_vowel_digraph(b"EA"));
        assert!(!is_vowel_digraph(b"AE"));
        assert!(!is_vowel_digraph(b"E"));

        assert!(is_consonant_digraph(b"TH"));
        assert!(!is_consonant_digraph(b"HT"));
        // SWR is not allowed even though SW and WR are
        assert!(!is_consonant_trigraph(b"SWR"));
        assert!(is_consonant_trigraph(b"SCH"));
    }
}
