use scramble_score::commands::{BatchConfig, Outcome, run_batch};
use scramble_score::core::{Classification, ScramblePair};
use scramble_score::records::loader::read_records;
use scramble_score::scoring::{classify, looks_real};

#[test]
fn test_sample_scrambles() {
    let cases = [
        ("MAPS", "SPAM", Classification::Fair),
        ("RIONY", "IRONY", Classification::Fair),
        ("ONYRI", "IRONY", Classification::Hard),
        ("IRONY", "IRONY", Classification::Not),
        ("INOYR", "IRONY", Classification::Fair),
        ("IOYRN", "IRONY", Classification::Poor),
    ];

    for (scrambled, word, expected) in cases {
        assert_eq!(
            classify(scrambled, word).unwrap(),
            expected,
            "{scrambled} vs {word}"
        );
    }
}

#[test]
fn test_lowercase_input() {
    assert_eq!(classify("onyri", "irony").unwrap(), Classification::Hard);
    assert_eq!(classify("Irony", "iRONY").unwrap(), Classification::Not);
}

#[test]
fn test_word_against_itself_is_not() {
    for word in ["A", "AB", "CHAOS", "THORAX", "BOOKKEEPER"] {
        assert_eq!(classify(word, word).unwrap(), Classification::Not);
    }
}

#[test]
fn test_different_letters_are_not() {
    assert_eq!(classify("IRONS", "IRONY").unwrap(), Classification::Not);
    assert_eq!(classify("IRON", "IRONY").unwrap(), Classification::Not);
    assert_eq!(classify("IRONYY", "IRONY").unwrap(), Classification::Not);
}

#[test]
fn test_looks_real_ignores_word() {
    // Same scramble, different words: only overlap changes
    assert!(looks_real("DROW"));
    assert_eq!(classify("DROW", "WORD").unwrap(), Classification::Hard);
    assert_eq!(classify("DROW", "DOWR").unwrap(), Classification::Fair);
}

#[test]
fn test_trailing_cluster_boundary() {
    // SCH at the very end is not consumed as a cluster
    assert!(!looks_real("ASCH"));
    assert_eq!(classify("ASCH", "CASH").unwrap(), Classification::Poor);
    // ...but is with a letter after it
    assert!(looks_real("OSCHA"));
    assert_eq!(classify("OSCHA", "CHAOS").unwrap(), Classification::Hard);
}

#[test]
fn test_invalid_input_is_an_error() {
    assert!(classify("IRO NY", "IRONY").is_err());
    assert!(ScramblePair::new("IRONY", "IR0NY").is_err());
}

#[test]
fn test_self_test_file() {
    let input = "\
MAPS SPAM fair
RIONY IRONY fair
ONYRI IRONY hard
IRONY IRONY NOT
INOYR IRONY fair
IOYRN IRONY poor
";
    let lines = read_records(input.as_bytes()).unwrap();
    let report = run_batch(&lines, BatchConfig::new().with_progress(false)).unwrap();

    assert_eq!(report.summary.passed, 6);
    assert_eq!(report.summary.failed, 0);
    for outcome in &report.outcomes {
        assert!(matches!(
            outcome.outcome,
            Outcome::Scored {
                verdict: Some(true),
                ..
            }
        ));
    }
}
