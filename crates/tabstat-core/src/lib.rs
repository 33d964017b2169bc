//! tabstat-core: typed column store with a statistics engine
//!
//! A [`DataFrame`] owns named, equal-length columns. Rows and columns are read
//! back as [`NamedVector`] snapshots, and numeric columns feed descriptive
//! statistics, t-tests, Pearson correlation and OLS regression. Charts are
//! delegated to a caller-supplied [`ChartBackend`](plotting::ChartBackend).
//!
//! ```
//! use tabstat_core::{Column, DataFrame};
//!
//! let df = DataFrame::from_columns([
//!     ("x", Column::from(vec![1.0, 2.0, 3.0, 4.0, 5.0])),
//!     ("y", Column::from(vec![3.0, 5.0, 7.0, 9.0, 11.0])),
//! ])
//! .unwrap();
//!
//! let coefs = df.estimate_linear_model("y", &["x"]).unwrap();
//! assert!((coefs["intercept"] - 1.0).abs() < 1e-6);
//! assert!((coefs["x"] - 2.0).abs() < 1e-6);
//! ```

pub mod errors;
pub mod format;
pub mod frame;
pub mod models;
pub mod plotting;
pub mod stats;
pub mod types;
pub mod vector;

pub use errors::{FrameError, FrameResult};
pub use format::DEFAULT_FORMAT_WIDTH;
pub use frame::DataFrame;
pub use types::*;
pub use vector::{DataVector, NamedVector};
