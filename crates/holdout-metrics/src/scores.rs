//! Classification scores derived from confusion counts.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::confusion::ConfusionCounts;

/// Metric names, in the order the scores are computed.
pub const METRIC_NAMES: [&str; 5] = [
    "accuracy",
    "sensitivity",
    "specificity",
    "precision",
    "f1_score",
];

/// The five binary classification scores.
///
/// Produced by [`ConfusionCounts::scores`] or [`classification_scores`].
/// When any denominator is zero all five fields are 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ClassificationScores {
    /// (tp + tn) / total.
    pub accuracy: f64,
    /// Recall: tp / (tp + fn).
    pub sensitivity: f64,
    /// tn / (tn + fp).
    pub specificity: f64,
    /// tp / (tp + fp).
    pub precision: f64,
    /// Harmonic mean of precision and sensitivity.
    pub f1_score: f64,
}

impl ClassificationScores {
    /// Look up a score by its metric name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "accuracy" => Some(self.accuracy),
            "sensitivity" => Some(self.sensitivity),
            "specificity" => Some(self.specificity),
            "precision" => Some(self.precision),
            "f1_score" => Some(self.f1_score),
            _ => None,
        }
    }

    /// Return the scores keyed by metric name.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        METRIC_NAMES
            .iter()
            .zip(self.values())
            .map(|(&name, value)| (name, value))
            .collect()
    }

    fn values(&self) -> [f64; 5] {
        [
            self.accuracy,
            self.sensitivity,
            self.specificity,
            self.precision,
            self.f1_score,
        ]
    }
}

impl fmt::Display for ClassificationScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in METRIC_NAMES.iter().zip(self.values()).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}={value:.4}")?;
        }
        Ok(())
    }
}

/// Scores computed one by one, with `None` for each undefined score.
///
/// `f1_score` is `None` whenever precision or sensitivity is undefined, or
/// when both are zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PartialScores {
    /// (tp + tn) / total, `None` when total is 0.
    pub accuracy: Option<f64>,
    /// tp / (tp + fn), `None` when there are no actual positives.
    pub sensitivity: Option<f64>,
    /// tn / (tn + fp), `None` when there are no actual negatives.
    pub specificity: Option<f64>,
    /// tp / (tp + fp), `None` when tp + fp is 0.
    pub precision: Option<f64>,
    /// Harmonic mean of precision and sensitivity.
    pub f1_score: Option<f64>,
}

impl PartialScores {
    /// Compute every score that has a non-zero denominator.
    #[must_use]
    pub fn from_counts(counts: &ConfusionCounts) -> Self {
        // f64 sums cannot overflow for any usize counts
        let [tp, fp, fn_, tn] = [counts.tp, counts.fp, counts.fn_, counts.tn].map(|c| c as f64);

        let accuracy = ratio(tp + tn, tp + fp + fn_ + tn);
        let sensitivity = ratio(tp, tp + fn_);
        let specificity = ratio(tn, tn + fp);
        let precision = ratio(tp, tp + fp);
        let f1_score = match (precision, sensitivity) {
            (Some(p), Some(s)) if p + s != 0.0 => Some(2.0 * p * s / (p + s)),
            _ => None,
        };

        Self {
            accuracy,
            sensitivity,
            specificity,
            precision,
            f1_score,
        }
    }

    /// True when all five scores are defined.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values().iter().all(Option::is_some)
    }

    /// Collapse to [`ClassificationScores`]: the computed values if all five
    /// are defined, otherwise 0.0 for every score.
    #[must_use]
    pub fn strict(&self) -> ClassificationScores {
        match self.values() {
            [
                Some(accuracy),
                Some(sensitivity),
                Some(specificity),
                Some(precision),
                Some(f1_score),
            ] => ClassificationScores {
                accuracy,
                sensitivity,
                specificity,
                precision,
                f1_score,
            },
            _ => ClassificationScores::default(),
        }
    }

    /// Return the scores keyed by metric name.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, Option<f64>> {
        METRIC_NAMES
            .iter()
            .zip(self.values())
            .map(|(&name, value)| (name, value))
            .collect()
    }

    fn values(&self) -> [Option<f64>; 5] {
        [
            self.accuracy,
            self.sensitivity,
            self.specificity,
            self.precision,
            self.f1_score,
        ]
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Accuracy, sensitivity, specificity, precision and F1 from the four
/// confusion counts.
///
/// If any of the five formulas would divide by zero, every score is 0.0,
/// not only the undefined one.
#[must_use]
pub fn classification_scores(tp: usize, fp: usize, fn_: usize, tn: usize) -> ClassificationScores {
    ConfusionCounts::new(tp, fp, fn_, tn).scores()
}
