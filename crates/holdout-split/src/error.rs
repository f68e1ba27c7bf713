//! Error types for holdout-split.

/// Errors from table construction and dataset splitting.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// Returned when the three proportions do not sum to 1.0 at 10 decimal places.
    #[error("train, validation and test proportions must sum to 1.0, got {sum}")]
    ProportionSum {
        /// The sum of the three proportions.
        sum: f64,
    },

    /// Returned when a proportion is negative, NaN, or infinite.
    #[error("{name} proportion must be finite and non-negative, got {value}")]
    InvalidProportion {
        /// Which proportion was invalid (`train`, `validation` or `test`).
        name: &'static str,
        /// The invalid value provided.
        value: f64,
    },

    /// Returned when a row has a different number of cells than there are columns.
    #[error("row {row_index} has {got} cells, expected {expected}")]
    RowWidthMismatch {
        /// Zero-based index of the offending row.
        row_index: usize,
        /// Number of columns in the table.
        expected: usize,
        /// Number of cells in the row.
        got: usize,
    },

    /// Returned when the same column name appears more than once.
    #[error("duplicate column \"{name}\": first at position {first}, again at position {second}")]
    DuplicateColumn {
        /// The duplicated column name.
        name: String,
        /// Zero-based position of the first occurrence.
        first: usize,
        /// Zero-based position of the second occurrence.
        second: usize,
    },

    /// Returned when a column lookup names a column the table does not have.
    #[error("unknown column \"{name}\"")]
    UnknownColumn {
        /// The requested column name.
        name: String,
    },
}
