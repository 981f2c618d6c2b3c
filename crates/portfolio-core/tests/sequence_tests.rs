// Host-side tests for the secret keyboard sequence detector.

use portfolio_core::sequence::{SequenceDetector, SequenceStep, SECRET_SEQUENCE};

fn feed_all(detector: &mut SequenceDetector, keys: &[&str]) -> Vec<SequenceStep> {
    keys.iter().map(|k| detector.feed(k)).collect()
}

#[test]
fn full_sequence_completes() {
    let mut detector = SequenceDetector::new();
    let steps = feed_all(&mut detector, &SECRET_SEQUENCE);
    assert_eq!(steps.len(), 10);
    assert_eq!(steps[9], SequenceStep::Completed);
    for step in &steps[..9] {
        assert_eq!(*step, SequenceStep::Advanced);
    }
    assert_eq!(detector.cursor(), 0, "completion rearms the detector");
}

#[test]
fn sequence_is_replayable() {
    let mut detector = SequenceDetector::new();
    for round in 0..3 {
        let steps = feed_all(&mut detector, &SECRET_SEQUENCE);
        assert_eq!(
            steps.last(),
            Some(&SequenceStep::Completed),
            "round {round} failed to complete"
        );
    }
}

#[test]
fn wrong_key_resets_progress() {
    let mut detector = SequenceDetector::new();
    detector.feed("ArrowUp");
    detector.feed("ArrowUp");
    detector.feed("ArrowDown");
    assert_eq!(detector.cursor(), 3);

    assert_eq!(detector.feed("x"), SequenceStep::Reset);
    assert_eq!(detector.cursor(), 0);
}

#[test]
fn mismatch_is_consumed_not_retried() {
    let mut detector = SequenceDetector::new();
    detector.feed("ArrowUp");
    detector.feed("ArrowUp");

    // A third ArrowUp mismatches ArrowDown. It must not count as a fresh
    // first step either.
    assert_eq!(detector.feed("ArrowUp"), SequenceStep::Reset);
    assert_eq!(detector.cursor(), 0);

    // Only a full clean run completes from here.
    let steps = feed_all(&mut detector, &SECRET_SEQUENCE);
    assert_eq!(steps.last(), Some(&SequenceStep::Completed));
}

#[test]
fn interrupted_run_cannot_complete_with_remainder() {
    let mut detector = SequenceDetector::new();
    detector.feed("ArrowUp");
    detector.feed("ArrowUp");
    detector.feed("q");

    // Feeding the rest of the code after the reset must not complete.
    let steps = feed_all(&mut detector, &SECRET_SEQUENCE[2..]);
    assert!(
        !steps.contains(&SequenceStep::Completed),
        "partial remainder completed after a reset"
    );
}

#[test]
fn detector_expects_pre_normalized_letters() {
    let mut detector = SequenceDetector::new();
    for key in &SECRET_SEQUENCE[..8] {
        detector.feed(key);
    }
    // The caller lowercases letter keys; an unnormalized "B" is a mismatch.
    assert_eq!(detector.feed("B"), SequenceStep::Reset);
}

#[test]
fn mismatch_at_start_stays_at_zero() {
    let mut detector = SequenceDetector::new();
    assert_eq!(detector.feed("Enter"), SequenceStep::Reset);
    assert_eq!(detector.cursor(), 0);
    assert_eq!(detector.feed("ArrowUp"), SequenceStep::Advanced);
}
