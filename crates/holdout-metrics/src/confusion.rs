//! Binary confusion counts from actual and predicted labels.

use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::MetricsError;
use crate::label::{BinaryLabel, LabelSequence};
use crate::scores::{ClassificationScores, PartialScores};

/// The four cells of a binary confusion matrix.
///
/// Each observation lands in exactly one cell, so the counts always sum to
/// the number of labels they were built from. Cells are keyed on the
/// *actual* label at agreeing and disagreeing positions:
///
/// | Cell | Labels agree | Actual |
/// |---|---|---|
/// | `tp` | yes | 1 |
/// | `fp` | no | 0 |
/// | `fn_` | no | 1 |
/// | `tn` | yes | 0 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConfusionCounts {
    /// True positives.
    pub tp: usize,
    /// False positives.
    pub fp: usize,
    /// False negatives.
    #[serde(rename = "fn")]
    pub fn_: usize,
    /// True negatives.
    pub tn: usize,
}

impl ConfusionCounts {
    /// Create counts from the four cells directly.
    #[must_use]
    pub fn new(tp: usize, fp: usize, fn_: usize, tn: usize) -> Self {
        Self { tp, fp, fn_, tn }
    }

    /// Count TP/FP/FN/TN from two index-aligned 0/1 label sequences.
    ///
    /// Empty sequences are valid and produce all-zero counts.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricsError::LengthMismatch`] | `actual` and `predicted` differ in length |
    /// | [`MetricsError::InvalidLabel`] | A value in either sequence is not 0 or 1 |
    #[instrument(skip_all, fields(n_labels = actual.len()))]
    pub fn from_labels(actual: &[usize], predicted: &[usize]) -> Result<Self, MetricsError> {
        if actual.len() != predicted.len() {
            return Err(MetricsError::LengthMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }

        let mut counts = Self::default();
        for (index, (&a, &p)) in actual.iter().zip(predicted).enumerate() {
            let a = BinaryLabel::parse(a, LabelSequence::Actual, index)?;
            let p = BinaryLabel::parse(p, LabelSequence::Predicted, index)?;
            counts.record(a, p);
        }

        debug!(
            tp = counts.tp,
            fp = counts.fp,
            fn_ = counts.fn_,
            tn = counts.tn,
            "confusion counts computed"
        );
        Ok(counts)
    }

    /// Count TP/FP/FN/TN from two index-aligned boolean sequences (`true` is positive).
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::LengthMismatch`] if the sequences differ in length.
    pub fn from_bools(actual: &[bool], predicted: &[bool]) -> Result<Self, MetricsError> {
        if actual.len() != predicted.len() {
            return Err(MetricsError::LengthMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }
        let mut counts = Self::default();
        for (&a, &p) in actual.iter().zip(predicted) {
            counts.record(a.into(), p.into());
        }
        Ok(counts)
    }

    fn record(&mut self, actual: BinaryLabel, predicted: BinaryLabel) {
        match (actual == predicted, actual) {
            (true, BinaryLabel::Positive) => self.tp += 1,
            (false, BinaryLabel::Negative) => self.fp += 1,
            (false, BinaryLabel::Positive) => self.fn_ += 1,
            (true, BinaryLabel::Negative) => self.tn += 1,
        }
    }

    /// Total number of observations counted. Saturates at `usize::MAX`.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tp
            .saturating_add(self.fp)
            .saturating_add(self.fn_)
            .saturating_add(self.tn)
    }

    /// Accuracy, sensitivity, specificity, precision and F1 with the
    /// all-or-nothing zero-division policy.
    ///
    /// If any of the five denominators is zero, every score is 0.0. Use
    /// [`partial_scores`](Self::partial_scores) to keep the defined ones.
    #[must_use]
    pub fn scores(&self) -> ClassificationScores {
        let partial = self.partial_scores();
        if !partial.is_complete() {
            debug!(
                tp = self.tp,
                fp = self.fp,
                fn_ = self.fn_,
                tn = self.tn,
                "undefined score denominator, reporting all scores as 0.0"
            );
        }
        partial.strict()
    }

    /// Scores computed independently; a score with a zero denominator is `None`.
    #[must_use]
    pub fn partial_scores(&self) -> PartialScores {
        PartialScores::from_counts(self)
    }
}

impl From<(usize, usize, usize, usize)> for ConfusionCounts {
    fn from((tp, fp, fn_, tn): (usize, usize, usize, usize)) -> Self {
        Self::new(tp, fp, fn_, tn)
    }
}

impl fmt::Display for ConfusionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8} {:>7} {:>7}", "", "pred_1", "pred_0")?;
        writeln!(f, "{:>8} {:>7} {:>7}", "actual_1", self.tp, self.fn_)?;
        writeln!(f, "{:>8} {:>7} {:>7}", "actual_0", self.fp, self.tn)
    }
}

/// Count `(tp, fp, fn, tn)` from two index-aligned 0/1 label sequences.
///
/// Shorthand for [`ConfusionCounts::from_labels`].
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MetricsError::LengthMismatch`] | `actual` and `predicted` differ in length |
/// | [`MetricsError::InvalidLabel`] | A value in either sequence is not 0 or 1 |
pub fn confusion_matrix(
    actual: &[usize],
    predicted: &[usize],
) -> Result<ConfusionCounts, MetricsError> {
    ConfusionCounts::from_labels(actual, predicted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_counted_example() {
        let actual = [0, 1, 1, 0, 1, 0, 1, 1, 0, 0];
        let predicted = [0, 1, 0, 0, 1, 0, 1, 0, 0, 1];
        let counts = confusion_matrix(&actual, &predicted).unwrap();
        // agree&1 at 1,4,6; disagree&0 at 9; disagree&1 at 2,7; agree&0 at 0,3,5,8
        assert_eq!(counts, ConfusionCounts::new(3, 1, 2, 4));
        assert_eq!(counts.total(), actual.len());
    }

    #[test]
    fn perfect_predictions() {
        let labels = [1, 0, 1, 1, 0];
        let counts = confusion_matrix(&labels, &labels).unwrap();
        assert_eq!(counts, ConfusionCounts::new(3, 0, 0, 2));
    }

    #[test]
    fn inverted_predictions() {
        let actual = [1, 0, 1, 0];
        let predicted = [0, 1, 0, 1];
        let counts = confusion_matrix(&actual, &predicted).unwrap();
        assert_eq!(counts, ConfusionCounts::new(0, 2, 2, 0));
    }

    #[test]
    fn empty_sequences_give_zero_counts() {
        let counts = confusion_matrix(&[], &[]).unwrap();
        assert_eq!(counts, ConfusionCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn length_mismatch_error() {
        let err = confusion_matrix(&[0, 1, 1], &[0, 1]).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::LengthMismatch {
                actual: 3,
                predicted: 2
            }
        ));
    }

    #[test]
    fn out_of_domain_actual_label() {
        let err = confusion_matrix(&[0, 2, 1], &[0, 1, 1]).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::InvalidLabel {
                sequence: LabelSequence::Actual,
                index: 1,
                value: 2
            }
        ));
    }

    #[test]
    fn out_of_domain_predicted_label() {
        let err = confusion_matrix(&[0, 1, 1], &[0, 1, 5]).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::InvalidLabel {
                sequence: LabelSequence::Predicted,
                index: 2,
                value: 5
            }
        ));
    }

    #[test]
    fn bools_match_integer_labels() {
        let actual = [true, false, true, true, false];
        let predicted = [true, true, false, true, false];
        let from_bools = ConfusionCounts::from_bools(&actual, &predicted).unwrap();

        let to_index = |v: &[bool]| v.iter().map(|&b| usize::from(b)).collect::<Vec<_>>();
        let from_ints = confusion_matrix(&to_index(&actual), &to_index(&predicted)).unwrap();
        assert_eq!(from_bools, from_ints);
    }

    #[test]
    fn bools_length_mismatch() {
        let err = ConfusionCounts::from_bools(&[true], &[]).unwrap_err();
        assert!(matches!(err, MetricsError::LengthMismatch { .. }));
    }

    #[test]
    fn from_tuple() {
        let counts: ConfusionCounts = (50, 10, 5, 100).into();
        assert_eq!(counts.fn_, 5);
        assert_eq!(counts.total(), 165);
    }

    #[test]
    fn total_saturates_on_huge_counts() {
        let half = usize::MAX / 2;
        assert_eq!(ConfusionCounts::new(half, half, half, half).total(), usize::MAX);
    }

    #[test]
    fn display_formatting() {
        let output = format!("{}", ConfusionCounts::new(3, 1, 2, 4));
        assert!(output.contains("pred_1"));
        assert!(output.contains("actual_0"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn serializes_fn_field_name() {
        let json = serde_json::to_value(ConfusionCounts::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json["fn"], 3);
        assert_eq!(json["tn"], 4);
    }
}
