//! Binary confusion counts and classification scores.
//!
//! Counts TP/FP/FN/TN from index-aligned 0/1 label sequences and derives
//! accuracy, sensitivity, specificity, precision and F1 from them. Scores
//! follow an all-or-nothing zero-division policy by default; a per-metric
//! variant reports undefined scores as `None` instead.

mod confusion;
mod error;
mod label;
mod scores;

pub use confusion::{ConfusionCounts, confusion_matrix};
pub use error::MetricsError;
pub use label::{BinaryLabel, LabelSequence};
pub use scores::{ClassificationScores, METRIC_NAMES, PartialScores, classification_scores};
