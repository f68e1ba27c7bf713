//! Binary classification scoring and train/validation/test splitting.
//!
//! Re-exports [`holdout_metrics`] and [`holdout_split`] so a training driver
//! can split a labeled table, predict on one part, and score the predictions
//! from a single dependency.

pub use holdout_metrics::{
    BinaryLabel, ClassificationScores, ConfusionCounts, LabelSequence, METRIC_NAMES,
    MetricsError, PartialScores, classification_scores, confusion_matrix,
};
pub use holdout_split::{
    DatasetSplit, SplitConfig, SplitError, SplitIndices, SplitProportions, SplitSizes, Table,
    split_dataset, split_indices,
};
