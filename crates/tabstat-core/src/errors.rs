use thiserror::Error;

use crate::types::DataType;

/// Errors that can occur while building a frame or computing statistics over it
///
/// Every variant names the column, entry or vector involved and the operation
/// that was attempted.
#[derive(Error, Debug)]
pub enum FrameError {
    // Lookup errors
    #[error("{operation}: column '{name}' not found")]
    ColumnNotFound {
        name: String,
        operation: &'static str,
    },

    #[error("{operation}: entry '{entry}' not found in vector '{vector}'")]
    EntryNotFound {
        vector: String,
        entry: String,
        operation: &'static str,
    },

    #[error("{operation}: row {index} out of range (frame has {row_count} rows)")]
    RowOutOfRange {
        index: usize,
        row_count: usize,
        operation: &'static str,
    },

    // Shape errors
    #[error("{operation}: column '{name}' already exists")]
    DuplicateColumnName {
        name: String,
        operation: &'static str,
    },

    #[error("{operation}: '{name}' has {actual} values, expected {expected}")]
    Shape {
        name: String,
        expected: usize,
        actual: usize,
        operation: &'static str,
    },

    #[error("{operation}: entry name '{entry}' appears more than once in vector '{vector}'")]
    DuplicateEntryName {
        vector: String,
        entry: String,
        operation: &'static str,
    },

    // Input validation errors
    #[error("{operation}: column '{name}' is {actual}, expected a numeric column")]
    TypeMismatch {
        name: String,
        actual: DataType,
        operation: &'static str,
    },

    #[error("{operation}: invalid argument '{name}': {reason}")]
    InvalidArgument {
        name: String,
        reason: String,
        operation: &'static str,
    },

    // Numerical errors
    #[error("{operation}: insufficient data in '{name}': {reason}")]
    InsufficientData {
        name: String,
        reason: String,
        operation: &'static str,
    },

    #[error("{operation}: design matrix for '{dependent}' is rank deficient: {reason}")]
    SingularDesignMatrix {
        dependent: String,
        reason: String,
        operation: &'static str,
    },

    // Chart backend errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for frame and statistics operations
pub type FrameResult<T> = Result<T, FrameError>;
