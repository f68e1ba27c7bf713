//! Regression tests for holdout-metrics on a deterministic synthetic classifier.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdout_metrics::{ConfusionCounts, MetricsError, classification_scores, confusion_matrix};

// ---------------------------------------------------------------------------
// Helper: noisy predictions over balanced labels
// ---------------------------------------------------------------------------

/// Generate `n` alternating labels and predictions that flip each label with
/// probability `flip_rate`.
fn make_predictions(n: usize, flip_rate: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let actual: Vec<usize> = (0..n).map(|i| i % 2).collect();
    let predicted = actual
        .iter()
        .map(|&a| if rng.r#gen::<f64>() < flip_rate { 1 - a } else { a })
        .collect();
    (actual, predicted)
}

#[test]
fn accuracy_tracks_flip_rate() {
    let (actual, predicted) = make_predictions(10_000, 0.1, 42);
    let scores = confusion_matrix(&actual, &predicted).unwrap().scores();

    assert!(
        (scores.accuracy - 0.9).abs() < 0.02,
        "accuracy {} not near 0.9",
        scores.accuracy
    );
    assert!((scores.sensitivity - 0.9).abs() < 0.03);
    assert!((scores.specificity - 0.9).abs() < 0.03);
}

#[test]
fn counts_match_direct_comparison() {
    let (actual, predicted) = make_predictions(1_000, 0.25, 7);
    let counts = confusion_matrix(&actual, &predicted).unwrap();

    let agree = actual.iter().zip(&predicted).filter(|(a, p)| a == p).count();
    assert_eq!(counts.tp + counts.tn, agree);
    assert_eq!(counts.fp + counts.fn_, actual.len() - agree);
    assert_eq!(counts.total(), 1_000);
}

#[test]
fn free_function_agrees_with_method() {
    let (actual, predicted) = make_predictions(500, 0.3, 3);
    let counts = confusion_matrix(&actual, &predicted).unwrap();
    let ConfusionCounts { tp, fp, fn_, tn } = counts;
    assert_eq!(classification_scores(tp, fp, fn_, tn), counts.scores());
}

#[test]
fn constant_forecast_is_degenerate() {
    // Predicting all 1s over all-positive labels leaves no actual negatives.
    let actual = vec![1; 20];
    let predicted = vec![1; 20];
    let counts = confusion_matrix(&actual, &predicted).unwrap();
    assert_eq!(counts, ConfusionCounts::new(20, 0, 0, 0));
    assert_eq!(counts.scores().accuracy, 0.0);
    assert_eq!(counts.partial_scores().accuracy, Some(1.0));
}

#[test]
fn malformed_input_fails_fast() {
    assert!(matches!(
        confusion_matrix(&[0, 1], &[0, 1, 0]),
        Err(MetricsError::LengthMismatch { .. })
    ));
    assert!(matches!(
        confusion_matrix(&[0, 3], &[0, 1]),
        Err(MetricsError::InvalidLabel { index: 1, value: 3, .. })
    ));
}
