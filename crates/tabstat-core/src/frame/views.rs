//! Row and column views over a [`DataFrame`]
//!
//! Views are owned snapshots. Mutating the frame afterwards does not change a
//! vector that was already handed out.

use super::DataFrame;
use crate::errors::{FrameError, FrameResult};
use crate::types::Value;
use crate::vector::{row_label, NamedVector};

impl DataFrame {
    fn row_labels(&self) -> Vec<String> {
        (0..self.row_count).map(row_label).collect()
    }

    /// Column `name` as a vector whose entries are labelled `row_0`, `row_1`, ...
    pub fn column_vector(&self, name: &str) -> FrameResult<NamedVector<Value>> {
        let column = self.lookup(name, "column_vector")?;
        Ok(NamedVector::from_parts(
            name.to_string(),
            self.row_labels(),
            column.values(),
        ))
    }

    /// Numeric column `name` widened to `f64`
    pub fn numeric_vector(&self, name: &str) -> FrameResult<NamedVector<f64>> {
        let values = self.numeric_column(name, "numeric_vector")?;
        Ok(NamedVector::from_parts(
            name.to_string(),
            self.row_labels(),
            values,
        ))
    }

    /// Row `index` as a vector named `row_<index>` whose entries are the column names
    pub fn row(&self, index: usize) -> FrameResult<NamedVector<Value>> {
        if index >= self.row_count {
            return Err(FrameError::RowOutOfRange {
                index,
                row_count: self.row_count,
                operation: "row",
            });
        }

        let values = self
            .columns
            .iter()
            .filter_map(|c| c.value(index))
            .collect();
        Ok(NamedVector::from_parts(
            row_label(index),
            self.names.clone(),
            values,
        ))
    }

    /// Every row view, in order
    pub fn rows(&self) -> impl Iterator<Item = NamedVector<Value>> + '_ {
        (0..self.row_count).filter_map(move |i| self.row(i).ok())
    }
}
