//! Validated train/validation/test proportions and the row counts they imply.

use serde::Serialize;

use crate::error::SplitError;

/// Decimal places the proportion sum is rounded to before comparing with 1.0.
const SUM_DECIMALS: usize = 10;

/// Train, validation and test fractions of a dataset.
///
/// Guaranteed finite, non-negative, and summing to 1.0 when rounded to 10
/// decimal places. The default is 0.80 / 0.0 / 0.20.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitProportions {
    train: f64,
    validation: f64,
    test: f64,
}

/// Row counts for each part of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitSizes {
    /// Rows in the training split.
    pub train: usize,
    /// Rows in the validation split.
    pub validation: usize,
    /// Rows in the test split.
    pub test: usize,
}

impl SplitSizes {
    /// Total rows across the three splits.
    #[must_use]
    pub fn total(&self) -> usize {
        self.train + self.validation + self.test
    }
}

impl SplitProportions {
    /// Validate and create split proportions.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SplitError::InvalidProportion`] | A proportion is negative, NaN, or infinite |
    /// | [`SplitError::ProportionSum`] | The sum, rounded to 10 decimals, is not 1.0 |
    pub fn new(train: f64, validation: f64, test: f64) -> Result<Self, SplitError> {
        for (name, value) in [("train", train), ("validation", validation), ("test", test)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SplitError::InvalidProportion { name, value });
            }
        }

        let sum = train + validation + test;
        if !rounds_to_one(sum, SUM_DECIMALS) {
            return Err(SplitError::ProportionSum { sum });
        }

        Ok(Self {
            train,
            validation,
            test,
        })
    }

    /// Return the training fraction.
    #[must_use]
    pub fn train(&self) -> f64 {
        self.train
    }

    /// Return the validation fraction.
    #[must_use]
    pub fn validation(&self) -> f64 {
        self.validation
    }

    /// Return the test fraction.
    #[must_use]
    pub fn test(&self) -> f64 {
        self.test
    }

    /// Row counts for a table of `n_rows` rows.
    ///
    /// Train and validation counts are `n_rows * fraction` rounded half to
    /// even; the test split takes the remainder. Counts are clamped so they
    /// never exceed `n_rows`, which can only shrink validation and test.
    #[must_use]
    pub fn sizes(&self, n_rows: usize) -> SplitSizes {
        let train = row_amount(n_rows, self.train).min(n_rows);
        let validation = row_amount(n_rows, self.validation).min(n_rows - train);
        SplitSizes {
            train,
            validation,
            test: n_rows - train - validation,
        }
    }
}

impl Default for SplitProportions {
    fn default() -> Self {
        Self {
            train: 0.8,
            validation: 0.0,
            test: 0.2,
        }
    }
}

/// True when the exact binary value of `value`, rounded to `decimals`
/// places, is 1.
fn rounds_to_one(value: f64, decimals: usize) -> bool {
    format!("{value:.decimals$}") == format!("{:.decimals$}", 1.0_f64)
}

fn row_amount(n_rows: usize, fraction: f64) -> usize {
    // fraction is finite and non-negative, so the cast cannot wrap
    (n_rows as f64 * fraction).round_ties_even() as usize
}
