//! Column store: named, equal-length, typed columns
//!
//! Columns keep their insertion order. Every column has exactly
//! [`DataFrame::row_count`] values; appending a column of any other length is
//! rejected and leaves the frame untouched.

mod views;

use tracing::debug;

use crate::errors::{FrameError, FrameResult};
use crate::types::{Column, DataType};

/// Column-major table of named columns
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    names: Vec<String>,
    columns: Vec<Column>,
    row_count: usize,
}

impl DataFrame {
    /// Creates an empty frame with no columns or rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from (name, column) pairs.
    ///
    /// All pairs are validated before anything is stored: a repeated name or
    /// a column whose length differs from the first column fails the whole
    /// batch.
    pub fn from_columns<I, S, C>(pairs: I) -> FrameResult<Self>
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<Column>,
    {
        let (names, columns): (Vec<String>, Vec<Column>) = pairs
            .into_iter()
            .map(|(name, column)| (name.into(), column.into()))
            .unzip();

        let row_count = columns.first().map(Column::len).unwrap_or(0);
        for (i, (name, column)) in names.iter().zip(&columns).enumerate() {
            if names[..i].contains(name) {
                return Err(FrameError::DuplicateColumnName {
                    name: name.clone(),
                    operation: "from_columns",
                });
            }
            if column.len() != row_count {
                return Err(FrameError::Shape {
                    name: name.clone(),
                    expected: row_count,
                    actual: column.len(),
                    operation: "from_columns",
                });
            }
        }

        debug!(columns = names.len(), rows = row_count, "Built data frame");

        Ok(Self {
            names,
            columns,
            row_count,
        })
    }

    /// Append a column.
    ///
    /// The first column of an empty frame sets the row count; every later
    /// column must match it.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> FrameResult<()> {
        let name = name.into();
        let column = column.into();

        if self.contains_column(&name) {
            return Err(FrameError::DuplicateColumnName {
                name,
                operation: "add_column",
            });
        }
        if !self.columns.is_empty() && column.len() != self.row_count {
            return Err(FrameError::Shape {
                name,
                expected: self.row_count,
                actual: column.len(),
                operation: "add_column",
            });
        }

        if self.columns.is_empty() {
            self.row_count = column.len();
        }

        debug!(
            column = %name,
            data_type = %column.data_type(),
            rows = self.row_count,
            "Added column"
        );

        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Column stored under `name`
    pub fn column(&self, name: &str) -> FrameResult<&Column> {
        self.lookup(name, "column")
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn column_type(&self, name: &str) -> FrameResult<DataType> {
        self.lookup(name, "column_type").map(Column::data_type)
    }

    /// (name, type) for every column, in order
    pub fn schema(&self) -> Vec<(&str, DataType)> {
        self.iter().map(|(n, c)| (n, c.data_type())).collect()
    }

    /// Iterator over (name, column) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }

    /// Numeric contents of `name` widened to `f64`.
    ///
    /// `operation` names the caller in any error raised.
    pub fn numeric_column(&self, name: &str, operation: &'static str) -> FrameResult<Vec<f64>> {
        let column = self.lookup(name, operation)?;
        column.to_f64().ok_or_else(|| FrameError::TypeMismatch {
            name: name.to_string(),
            actual: column.data_type(),
            operation,
        })
    }

    pub(crate) fn lookup(&self, name: &str, operation: &'static str) -> FrameResult<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| FrameError::ColumnNotFound {
                name: name.to_string(),
                operation,
            })
    }
}
