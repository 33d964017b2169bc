//! Pearson product-moment correlation

use anofox_tests::pearson as lib_pearson;

use super::Sample;
use crate::errors::{FrameError, FrameResult};

const OP: &str = "pearsons_correlation";

/// Pearson correlation coefficient of two paired samples.
///
/// Returns NaN when either sample has zero variance (including empty
/// samples); that is a defined outcome, not an error.
pub fn pearson(x: &Sample<'_>, y: &Sample<'_>) -> FrameResult<f64> {
    if x.values.len() != y.values.len() {
        return Err(FrameError::Shape {
            name: y.name.to_string(),
            expected: x.values.len(),
            actual: y.values.len(),
            operation: OP,
        });
    }

    match x.values.len() {
        0 | 1 => return Ok(f64::NAN),
        // Two distinct points always lie on a line
        2 => {
            let slope = (x.values[1] - x.values[0]) * (y.values[1] - y.values[0]);
            return Ok(if slope == 0.0 { f64::NAN } else { slope.signum() });
        }
        _ => {}
    }

    let result = lib_pearson(x.values, y.values, None).map_err(|e| FrameError::InvalidArgument {
        name: format!("{}, {}", x.name, y.name),
        reason: e.to_string(),
        operation: OP,
    })?;
    Ok(result.estimate)
}
