use crate::label::LabelSequence;

/// Errors from confusion counting.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Returned when the actual and predicted sequences differ in length.
    #[error("label sequences differ in length: {actual} actual vs {predicted} predicted")]
    LengthMismatch {
        /// Length of the actual label sequence.
        actual: usize,
        /// Length of the predicted label sequence.
        predicted: usize,
    },

    /// Returned when a label is neither 0 nor 1.
    #[error("{sequence} label at index {index} is {value}, expected 0 or 1")]
    InvalidLabel {
        /// The sequence holding the offending label.
        sequence: LabelSequence,
        /// Zero-based position of the offending label.
        index: usize,
        /// The out-of-domain value.
        value: usize,
    },
}
