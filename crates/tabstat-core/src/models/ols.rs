//! Ordinary Least Squares (OLS) regression with intercept
//!
//! Wraps `anofox_regression`'s `OlsRegressor`. The solver aliases predictors
//! that are constant or collinear with earlier columns (NaN coefficient);
//! here any aliased predictor is reported as a singular design instead.

use anofox_regression::solvers::{FittedRegressor, OlsRegressor, RegressionError, Regressor};
use anofox_tests::{t_test, Alternative, TTestKind};
use faer::{Col, Mat};
use tracing::debug;

use crate::errors::{FrameError, FrameResult};
use crate::stats::Sample;
use crate::types::{CoefficientInference, LinearModel, OlsOptions, INTERCEPT};

const OP: &str = "estimate_linear_model";

fn singular(dependent: &Sample<'_>, reason: String) -> FrameError {
    FrameError::SingularDesignMatrix {
        dependent: dependent.name.to_string(),
        reason,
        operation: OP,
    }
}

fn convert_error(dependent: &Sample<'_>, e: RegressionError) -> FrameError {
    match e {
        RegressionError::InsufficientObservations { .. }
        | RegressionError::SingularMatrix
        | RegressionError::AllFeaturesConstant => singular(dependent, e.to_string()),
        other => FrameError::InvalidArgument {
            name: dependent.name.to_string(),
            reason: other.to_string(),
            operation: OP,
        },
    }
}

/// Intercept entry followed by one entry per predictor; NaN where absent
fn intercept_first(intercept: Option<f64>, rest: &Option<Col<f64>>, k: usize) -> Vec<f64> {
    let rest: Vec<f64> = rest
        .as_ref()
        .map(|c| c.iter().copied().collect())
        .unwrap_or_else(|| vec![f64::NAN; k]);
    std::iter::once(intercept.unwrap_or(f64::NAN))
        .chain(rest)
        .collect()
}

/// Fit `dependent ~ 1 + predictors` by least squares
///
/// # Arguments
/// * `dependent` - Response variable (n observations)
/// * `predictors` - Independent variables, each with n observations
/// * `options` - Fitting options
///
/// # Returns
/// * `LinearModel` with the intercept under `"intercept"` followed by one
///   coefficient per predictor, in order
pub fn fit_ols(
    dependent: &Sample<'_>,
    predictors: &[Sample<'_>],
    options: &OlsOptions,
) -> FrameResult<LinearModel> {
    let n_obs = dependent.values.len();
    let n_features = predictors.len();
    let n_params = n_features + 1;

    for x in predictors {
        if x.values.len() != n_obs {
            return Err(FrameError::Shape {
                name: x.name.to_string(),
                expected: n_obs,
                actual: x.values.len(),
                operation: OP,
            });
        }
    }

    if options.compute_inference
        && !(options.confidence_level > 0.0 && options.confidence_level < 1.0)
    {
        return Err(FrameError::InvalidArgument {
            name: "confidence_level".into(),
            reason: format!("{} is outside (0, 1)", options.confidence_level),
            operation: OP,
        });
    }

    if n_obs < n_params {
        return Err(singular(
            dependent,
            format!("{} observations for {} parameters", n_obs, n_params),
        ));
    }

    if options.compute_inference && n_obs == n_params {
        return Err(FrameError::InsufficientData {
            name: dependent.name.to_string(),
            reason: format!(
                "inference needs more than {} observations, got {}",
                n_params, n_obs
            ),
            operation: OP,
        });
    }

    if n_features == 0 {
        return fit_intercept_only(dependent, options);
    }

    let y_col = Col::from_fn(n_obs, |i| dependent.values[i]);
    let x_mat = Mat::from_fn(n_obs, n_features, |i, j| predictors[j].values[i]);

    let fitted = OlsRegressor::builder()
        .with_intercept(true)
        .compute_inference(options.compute_inference)
        .confidence_level(options.confidence_level)
        .build()
        .fit(&x_mat, &y_col)
        .map_err(|e| convert_error(dependent, e))?;
    let result = fitted.result();

    if let Some(j) = result.aliased.iter().position(|&a| a) {
        return Err(singular(
            dependent,
            format!(
                "'{}' is constant or collinear with earlier columns",
                predictors[j].name
            ),
        ));
    }
    if result.rank < n_features {
        return Err(singular(
            dependent,
            format!("design has rank {} for {} predictors", result.rank, n_features),
        ));
    }
    let intercept = result
        .intercept
        .ok_or_else(|| singular(dependent, "no intercept was estimated".into()))?;

    let residuals: Vec<f64> = result.residuals.iter().copied().collect();
    let df_resid = n_obs - n_params;
    let residual_std_error = residual_std_error(&residuals, df_resid);

    debug!(
        dependent = dependent.name,
        observations = n_obs,
        parameters = n_params,
        r_squared = result.r_squared,
        "Fitted OLS model"
    );

    let inference = options.compute_inference.then(|| CoefficientInference {
        std_errors: intercept_first(result.intercept_std_error, &result.std_errors, n_features),
        t_values: intercept_first(
            result.intercept_t_statistic,
            &result.t_statistics,
            n_features,
        ),
        p_values: intercept_first(result.intercept_p_value, &result.p_values, n_features),
        ci_lower: intercept_first(
            result.intercept_conf_interval.map(|(lo, _)| lo),
            &result.conf_interval_lower,
            n_features,
        ),
        ci_upper: intercept_first(
            result.intercept_conf_interval.map(|(_, hi)| hi),
            &result.conf_interval_upper,
            n_features,
        ),
        confidence_level: options.confidence_level,
    });

    let coefficients = std::iter::once((INTERCEPT.to_string(), intercept))
        .chain(
            predictors
                .iter()
                .zip(result.coefficients.iter())
                .map(|(x, &b)| (x.name.to_string(), b)),
        )
        .collect();

    Ok(LinearModel {
        dependent: dependent.name.to_string(),
        coefficients,
        r_squared: result.r_squared,
        adj_r_squared: result.adj_r_squared,
        residual_std_error,
        residuals,
        n_observations: n_obs,
        n_features,
        inference,
    })
}

fn residual_std_error(residuals: &[f64], df_resid: usize) -> f64 {
    if df_resid == 0 {
        return f64::NAN;
    }
    (residuals.iter().map(|e| e * e).sum::<f64>() / df_resid as f64).sqrt()
}

/// `dependent ~ 1`: the intercept is the mean and its test is a one-sample t-test
fn fit_intercept_only(dependent: &Sample<'_>, options: &OlsOptions) -> FrameResult<LinearModel> {
    let n_obs = dependent.values.len();
    let mean = dependent.values.iter().sum::<f64>() / n_obs as f64;
    let residuals: Vec<f64> = dependent.values.iter().map(|y| y - mean).collect();
    let residual_std_error = residual_std_error(&residuals, n_obs - 1);

    let inference = if options.compute_inference {
        // Paired against a zero baseline, the differences are the values themselves
        let baseline = vec![0.0; n_obs];
        let test = t_test(
            dependent.values,
            &baseline,
            TTestKind::Paired,
            Alternative::TwoSided,
            0.0,
            Some(options.confidence_level),
        )
        .map_err(|e| FrameError::InsufficientData {
            name: dependent.name.to_string(),
            reason: e.to_string(),
            operation: OP,
        })?;
        let (ci_lower, ci_upper) = test
            .conf_int
            .as_ref()
            .map(|ci| (ci.lower, ci.upper))
            .unwrap_or((f64::NAN, f64::NAN));
        Some(CoefficientInference {
            std_errors: vec![residual_std_error / (n_obs as f64).sqrt()],
            t_values: vec![test.statistic],
            p_values: vec![test.p_value],
            ci_lower: vec![ci_lower],
            ci_upper: vec![ci_upper],
            confidence_level: options.confidence_level,
        })
    } else {
        None
    };

    debug!(
        dependent = dependent.name,
        observations = n_obs,
        "Fitted intercept-only model"
    );

    Ok(LinearModel {
        dependent: dependent.name.to_string(),
        coefficients: vec![(INTERCEPT.to_string(), mean)],
        r_squared: 0.0,
        adj_r_squared: 0.0,
        residual_std_error,
        residuals,
        n_observations: n_obs,
        n_features: 0,
        inference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_ols() {
        // Exact relationship: y = 2*x + 1
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [3.0, 5.0, 7.0, 9.0, 11.0];

        let model = fit_ols(
            &Sample::new("y", &y),
            &[Sample::new("x", &x)],
            &OlsOptions::default(),
        )
        .unwrap();

        assert!((model.intercept().unwrap() - 1.0).abs() < 1e-6);
        assert!((model.coefficient("x").unwrap() - 2.0).abs() < 1e-6);
        assert!((model.r_squared - 1.0).abs() < 1e-9);
        assert_eq!(model.coefficients[0].0, "intercept");
        assert!(model.inference.is_none());
    }

    #[test]
    fn test_multiple_regression() {
        // y = 0.5 + 1.5*a - 2*b, with b not a linear function of a
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [2.0, 1.0, 4.0, 3.0, 6.0, 5.0];
        let y: Vec<f64> = a.iter().zip(&b).map(|(a, b)| 0.5 + 1.5 * a - 2.0 * b).collect();

        let model = fit_ols(
            &Sample::new("y", &y),
            &[Sample::new("a", &a), Sample::new("b", &b)],
            &OlsOptions::default(),
        )
        .unwrap();

        assert!((model.intercept().unwrap() - 0.5).abs() < 1e-9);
        assert!((model.coefficient("a").unwrap() - 1.5).abs() < 1e-9);
        assert!((model.coefficient("b").unwrap() + 2.0).abs() < 1e-9);
        assert!(model.residuals.iter().all(|e| e.abs() < 1e-9));
    }

    #[test]
    fn test_least_squares_residuals_orthogonal() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let y = [2.1, 4.0, 5.9, 8.1, 10.0, 11.9, 14.1, 16.0, 17.9, 20.1];

        let model = fit_ols(
            &Sample::new("y", &y),
            &[Sample::new("x", &x)],
            &OlsOptions::default(),
        )
        .unwrap();

        let sum: f64 = model.residuals.iter().sum();
        let dot: f64 = model.residuals.iter().zip(&x).map(|(e, x)| e * x).sum();
        assert!(sum.abs() < 1e-9);
        assert!(dot.abs() < 1e-9);
        assert!(model.r_squared > 0.99);
    }

    #[test]
    fn test_tiny_scale_predictor_is_not_singular() {
        let x = [1e-12, 2e-12, 3e-12, 4e-12, 5e-12];
        let y = [3.0, 5.0, 7.0, 9.0, 11.0];

        let model = fit_ols(
            &Sample::new("y", &y),
            &[Sample::new("x", &x)],
            &OlsOptions::default(),
        )
        .unwrap();

        assert!((model.intercept().unwrap() - 3.0).abs() < 1e-6);
        assert!((model.coefficient("x").unwrap() / 2e12 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ols_with_inference() {
        let dose = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];
        let response = [1.2, 2.9, 3.1, 5.2, 5.4, 7.3, 7.2, 9.1];

        let options = OlsOptions {
            compute_inference: true,
            confidence_level: 0.90,
        };
        let model = fit_ols(
            &Sample::new("response", &response),
            &[Sample::new("dose", &dose)],
            &options,
        )
        .unwrap();
        let inference = model.inference.as_ref().unwrap();

        assert_eq!(inference.std_errors.len(), 2);
        assert_eq!(inference.confidence_level, 0.90);
        assert!(inference.p_values[1] < 0.001);
        for (j, (_, b)) in model.coefficients.iter().enumerate() {
            assert!(inference.std_errors[j] > 0.0);
            assert!((inference.t_values[j] - b / inference.std_errors[j]).abs() < 1e-6);
            assert!(inference.ci_lower[j] < *b && *b < inference.ci_upper[j]);
        }
    }

    #[test]
    fn test_intercept_only_inference() {
        let y = [2.0, 4.0, 9.0];
        let options = OlsOptions {
            compute_inference: true,
            ..OlsOptions::default()
        };
        let model = fit_ols(&Sample::new("y", &y), &[], &options).unwrap();
        let inference = model.inference.unwrap();

        // sd = sqrt(13), se = sd / sqrt(3)
        assert!((inference.std_errors[0] - (13.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert!((inference.t_values[0] - 5.0 / (13.0f64 / 3.0).sqrt()).abs() < 1e-9);
        assert!(inference.ci_lower[0] < 5.0 && 5.0 < inference.ci_upper[0]);
    }

    #[test]
    fn test_duplicated_predictor_is_singular() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [3.0, 5.0, 7.0, 9.0, 11.0];
        let result = fit_ols(
            &Sample::new("y", &y),
            &[Sample::new("x", &x), Sample::new("x2", &x)],
            &OlsOptions::default(),
        );
        match result {
            Err(FrameError::SingularDesignMatrix { dependent, reason, .. }) => {
                assert_eq!(dependent, "y");
                assert!(reason.contains("x2"));
            }
            other => panic!("expected SingularDesignMatrix, got {:?}", other),
        }
    }

    #[test]
    fn test_constant_predictor_is_singular() {
        let c = [4.0, 4.0, 4.0, 4.0];
        let y = [1.0, 2.0, 3.0, 5.0];
        let result = fit_ols(
            &Sample::new("y", &y),
            &[Sample::new("c", &c)],
            &OlsOptions::default(),
        );
        match result {
            Err(FrameError::SingularDesignMatrix { reason, .. }) => assert!(reason.contains("'c'")),
            other => panic!("expected SingularDesignMatrix, got {:?}", other),
        }
    }

    #[test]
    fn test_too_few_observations() {
        let result = fit_ols(
            &Sample::new("y", &[1.0, 2.0]),
            &[Sample::new("a", &[1.0, 3.0]), Sample::new("b", &[2.0, 7.0])],
            &OlsOptions::default(),
        );
        assert!(matches!(result, Err(FrameError::SingularDesignMatrix { .. })));
    }

    #[test]
    fn test_saturated_fit_has_no_inference() {
        let options = OlsOptions {
            compute_inference: true,
            ..OlsOptions::default()
        };
        let result = fit_ols(
            &Sample::new("y", &[1.0, 4.0]),
            &[Sample::new("x", &[0.0, 1.0])],
            &options,
        );
        assert!(matches!(result, Err(FrameError::InsufficientData { .. })));
    }

    #[test]
    fn test_intercept_only() {
        let y = [2.0, 4.0, 9.0];
        let model = fit_ols(&Sample::new("y", &y), &[], &OlsOptions::default()).unwrap();
        assert!((model.intercept().unwrap() - 5.0).abs() < 1e-12);
        assert_eq!(model.n_features, 0);
    }

    #[test]
    fn test_invalid_confidence_level() {
        let options = OlsOptions {
            compute_inference: true,
            confidence_level: 1.5,
        };
        let result = fit_ols(
            &Sample::new("y", &[1.0, 2.0, 4.0]),
            &[Sample::new("x", &[1.0, 2.0, 3.0])],
            &options,
        );
        assert!(matches!(result, Err(FrameError::InvalidArgument { .. })));
    }
}
