//! In-memory tables of rows with a fixed column schema.

use std::collections::HashMap;

use crate::error::SplitError;

/// A table of rows sharing one column schema.
///
/// `rows[i][j]` is the cell of row `i` in column `columns[j]`. Every row has
/// exactly one cell per column. Row positions are dense, `0..n_rows()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    columns: Vec<String>,
    rows: Vec<Vec<T>>,
}

impl<T> Table<T> {
    /// Create a table, validating the column names and row widths.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SplitError::DuplicateColumn`] | A column name appears twice |
    /// | [`SplitError::RowWidthMismatch`] | A row's cell count differs from the column count |
    pub fn new(columns: Vec<String>, rows: Vec<Vec<T>>) -> Result<Self, SplitError> {
        {
            let mut seen: HashMap<&str, usize> = HashMap::with_capacity(columns.len());
            for (position, name) in columns.iter().enumerate() {
                if let Some(&first) = seen.get(name.as_str()) {
                    return Err(SplitError::DuplicateColumn {
                        name: name.clone(),
                        first,
                        second: position,
                    });
                }
                seen.insert(name.as_str(), position);
            }
        }

        if let Some((row_index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(SplitError::RowWidthMismatch {
                row_index,
                expected: columns.len(),
                got: row.len(),
            });
        }

        Ok(Self { columns, rows })
    }

    /// Return the column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Return the rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Return the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Return the number of columns.
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Return true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return the position of the named column.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::UnknownColumn`] if no column has that name.
    pub fn column_index(&self, name: &str) -> Result<usize, SplitError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| SplitError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Consume the table and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T: Clone> Table<T> {
    /// Copy out every cell of the named column, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::UnknownColumn`] if no column has that name.
    pub fn column(&self, name: &str) -> Result<Vec<T>, SplitError> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }

    /// Build a new table from the rows at `positions`, in that order.
    ///
    /// Callers pass positions drawn from a permutation of `0..n_rows()`.
    pub(crate) fn take_rows(&self, positions: &[usize]) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: positions.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}
