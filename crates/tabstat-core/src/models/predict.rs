//! Prediction from fitted linear models

use crate::errors::{FrameError, FrameResult};
use crate::stats::Sample;
use crate::types::LinearModel;

/// Fitted values `intercept + sum(coef_j * x_j)` for every observation
///
/// # Arguments
/// * `model` - Fitted model
/// * `predictors` - One sample per model predictor, matched by name
///
/// # Returns
/// * Vector of predicted values (n observations)
pub fn predict(model: &LinearModel, predictors: &[Sample<'_>]) -> FrameResult<Vec<f64>> {
    let intercept = model.intercept().unwrap_or(0.0);

    let mut columns: Vec<(&[f64], f64)> = Vec::with_capacity(model.n_features);
    for (name, coef) in model.predictors() {
        let x = predictors
            .iter()
            .find(|x| x.name == name)
            .ok_or_else(|| FrameError::ColumnNotFound {
                name: name.to_string(),
                operation: "predict",
            })?;
        if let Some((first, _)) = columns.first() {
            if x.values.len() != first.len() {
                return Err(FrameError::Shape {
                    name: name.to_string(),
                    expected: first.len(),
                    actual: x.values.len(),
                    operation: "predict",
                });
            }
        }
        columns.push((x.values, coef));
    }

    // Intercept-only models predict one value per row of the first sample given
    let n_obs = columns
        .first()
        .map(|(values, _)| values.len())
        .or_else(|| predictors.first().map(|x| x.values.len()))
        .unwrap_or(0);

    Ok((0..n_obs)
        .map(|i| {
            intercept
                + columns
                    .iter()
                    .map(|(values, coef)| coef * values[i])
                    .sum::<f64>()
        })
        .collect())
}
