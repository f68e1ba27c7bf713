//! Split result types.

use crate::proportions::SplitSizes;
use crate::table::Table;

/// Row positions of each split within the input table.
///
/// Together the three vectors are a permutation of `0..n_rows`; each split
/// keeps the order in which its rows were drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitIndices {
    /// Input positions of the training rows.
    pub train: Vec<usize>,
    /// Input positions of the validation rows.
    pub validation: Vec<usize>,
    /// Input positions of the test rows.
    pub test: Vec<usize>,
}

impl SplitIndices {
    /// Row counts of the three splits.
    #[must_use]
    pub fn sizes(&self) -> SplitSizes {
        SplitSizes {
            train: self.train.len(),
            validation: self.validation.len(),
            test: self.test.len(),
        }
    }
}

/// A table partitioned into training, validation and test tables.
///
/// Each table keeps the input's columns and is densely indexed from 0. The
/// positions the rows came from are available through [`indices`](Self::indices).
#[derive(Debug, Clone)]
pub struct DatasetSplit<T> {
    train: Table<T>,
    validation: Table<T>,
    test: Table<T>,
    indices: SplitIndices,
}

impl<T: Clone> DatasetSplit<T> {
    /// Materialize the three tables from drawn positions.
    pub(crate) fn from_indices(table: &Table<T>, indices: SplitIndices) -> Self {
        Self {
            train: table.take_rows(&indices.train),
            validation: table.take_rows(&indices.validation),
            test: table.take_rows(&indices.test),
            indices,
        }
    }
}

impl<T> DatasetSplit<T> {
    /// Borrow the training table.
    #[must_use]
    pub fn train(&self) -> &Table<T> {
        &self.train
    }

    /// Borrow the validation table.
    #[must_use]
    pub fn validation(&self) -> &Table<T> {
        &self.validation
    }

    /// Borrow the test table.
    #[must_use]
    pub fn test(&self) -> &Table<T> {
        &self.test
    }

    /// Borrow the input positions of each split.
    #[must_use]
    pub fn indices(&self) -> &SplitIndices {
        &self.indices
    }

    /// Row counts of the three splits.
    #[must_use]
    pub fn sizes(&self) -> SplitSizes {
        self.indices.sizes()
    }

    /// Consume the split and return `(train, validation, test)`.
    #[must_use]
    pub fn into_tables(self) -> (Table<T>, Table<T>, Table<T>) {
        (self.train, self.validation, self.test)
    }
}
