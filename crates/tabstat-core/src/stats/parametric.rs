//! Parametric statistical tests
//!
//! - One-sample Student's t-test
//! - Two-sample Welch t-test (unequal variances)
//!
//! Both report two-tailed p-values.

use anofox_tests::{t_test, Alternative, StatError, TTestKind};

use super::Sample;
use crate::errors::{FrameError, FrameResult};
use crate::types::TTestResult;

fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
}

fn require_two(sample: &Sample<'_>, operation: &'static str) -> FrameResult<()> {
    if sample.values.len() < 2 {
        return Err(FrameError::InsufficientData {
            name: sample.name.to_string(),
            reason: format!(
                "t-test requires at least 2 observations, got {}",
                sample.values.len()
            ),
            operation,
        });
    }
    Ok(())
}

fn convert_error(e: StatError, name: &str, operation: &'static str) -> FrameError {
    match e {
        StatError::InvalidParameter(reason) => FrameError::InvalidArgument {
            name: name.to_string(),
            reason,
            operation,
        },
        other => FrameError::InsufficientData {
            name: name.to_string(),
            reason: other.to_string(),
            operation,
        },
    }
}

/// One-sample t-test of `sample` against the hypothesised mean `mu`
///
/// Run as a paired test against a zero baseline, whose differences are the
/// sample itself.
pub fn one_sample_t_test(sample: &Sample<'_>, mu: f64) -> FrameResult<TTestResult> {
    const OP: &str = "one_sample_t_test";
    require_two(sample, OP)?;
    if sample_variance(sample.values) == 0.0 {
        return Err(FrameError::InsufficientData {
            name: sample.name.to_string(),
            reason: "zero standard deviation, t statistic undefined".into(),
            operation: OP,
        });
    }

    let baseline = vec![0.0; sample.values.len()];
    let result = t_test(
        sample.values,
        &baseline,
        TTestKind::Paired,
        Alternative::TwoSided,
        mu,
        None,
    )
    .map_err(|e| convert_error(e, sample.name, OP))?;

    Ok(TTestResult {
        statistic: result.statistic,
        df: result.df,
        p_value: result.p_value,
        mean_difference: result.mean_x - mu,
        n1: sample.values.len(),
        n2: 0,
        method: "One-sample t-test".into(),
    })
}

/// Welch's two-sample t-test
///
/// Degrees of freedom follow the Welch-Satterthwaite approximation.
pub fn two_sample_t_test(first: &Sample<'_>, second: &Sample<'_>) -> FrameResult<TTestResult> {
    const OP: &str = "two_sample_t_test";
    require_two(first, OP)?;
    require_two(second, OP)?;

    if sample_variance(first.values) == 0.0 && sample_variance(second.values) == 0.0 {
        return Err(FrameError::InsufficientData {
            name: format!("{}, {}", first.name, second.name),
            reason: "both samples have zero variance, t statistic undefined".into(),
            operation: OP,
        });
    }

    let result = t_test(
        first.values,
        second.values,
        TTestKind::Welch,
        Alternative::TwoSided,
        0.0,
        None,
    )
    .map_err(|e| convert_error(e, first.name, OP))?;

    Ok(TTestResult {
        statistic: result.statistic,
        df: result.df,
        p_value: result.p_value,
        mean_difference: result.mean_x - result.mean_y.unwrap_or(f64::NAN),
        n1: first.values.len(),
        n2: second.values.len(),
        method: "Welch two-sample t-test".into(),
    })
}
