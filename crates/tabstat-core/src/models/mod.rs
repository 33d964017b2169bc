//! Regression model implementations

mod ols;
mod predict;

pub use ols::fit_ols;
pub use predict::predict;
