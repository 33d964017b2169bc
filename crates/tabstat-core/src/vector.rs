//! Named vectors: one row or one column of a frame
//!
//! [`DataVector`] is the capability shared by every vector: a name, ordered
//! entry names and the values paired with them. Map views and fixed-width
//! rendering are provided once on top of that contract.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use crate::errors::{FrameError, FrameResult};
use crate::format::{format_row, DEFAULT_FORMAT_WIDTH};

/// A named, ordered collection of (entry name, value) pairs
pub trait DataVector<E> {
    /// Column name for column views, `row_<i>` for row views
    fn name(&self) -> &str;

    /// Entry names, positionally matching [`values`](Self::values)
    fn entry_names(&self) -> &[String];

    /// Value stored under `entry_name`
    fn value(&self, entry_name: &str) -> FrameResult<&E>;

    fn values(&self) -> &[E];

    fn len(&self) -> usize {
        self.values().len()
    }

    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// (entry name, value) pairs in order
    fn iter(&self) -> std::iter::Zip<std::slice::Iter<'_, String>, std::slice::Iter<'_, E>> {
        self.entry_names().iter().zip(self.values().iter())
    }

    fn as_map(&self) -> HashMap<String, E>
    where
        E: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Name followed by every value, each field exactly `col_width` characters
    fn format_row(&self, col_width: usize) -> String
    where
        E: Display,
    {
        format_row(self.name(), self.values(), col_width)
    }

    /// Write `format_row(DEFAULT_FORMAT_WIDTH)` to standard output
    fn print(&self)
    where
        E: Display,
    {
        println!("{}", self.format_row(DEFAULT_FORMAT_WIDTH));
    }
}

/// Owned snapshot of a row or column
#[derive(Debug, Clone, PartialEq)]
pub struct NamedVector<E> {
    name: String,
    entry_names: Vec<String>,
    values: Vec<E>,
}

impl<E> NamedVector<E> {
    /// Build a vector, rejecting mismatched lengths and repeated entry names
    pub fn new(
        name: impl Into<String>,
        entry_names: Vec<String>,
        values: Vec<E>,
    ) -> FrameResult<Self> {
        let name = name.into();
        if entry_names.len() != values.len() {
            return Err(FrameError::Shape {
                name,
                expected: entry_names.len(),
                actual: values.len(),
                operation: "NamedVector::new",
            });
        }

        let mut seen = HashSet::with_capacity(entry_names.len());
        for entry in &entry_names {
            if !seen.insert(entry.as_str()) {
                return Err(FrameError::DuplicateEntryName {
                    vector: name,
                    entry: entry.clone(),
                    operation: "NamedVector::new",
                });
            }
        }

        Ok(Self {
            name,
            entry_names,
            values,
        })
    }

    /// Caller guarantees equal lengths and unique entry names.
    pub(crate) fn from_parts(name: String, entry_names: Vec<String>, values: Vec<E>) -> Self {
        debug_assert_eq!(entry_names.len(), values.len());
        Self {
            name,
            entry_names,
            values,
        }
    }

    pub fn into_values(self) -> Vec<E> {
        self.values
    }

    fn position(&self, entry_name: &str) -> Option<usize> {
        self.entry_names.iter().position(|n| n == entry_name)
    }
}

impl<E> DataVector<E> for NamedVector<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn entry_names(&self) -> &[String] {
        &self.entry_names
    }

    fn value(&self, entry_name: &str) -> FrameResult<&E> {
        self.position(entry_name)
            .map(|i| &self.values[i])
            .ok_or_else(|| FrameError::EntryNotFound {
                vector: self.name.clone(),
                entry: entry_name.to_string(),
                operation: "value",
            })
    }

    fn values(&self) -> &[E] {
        &self.values
    }
}

/// Synthetic label of row `index`
pub fn row_label(index: usize) -> String {
    format!("row_{index}")
}
