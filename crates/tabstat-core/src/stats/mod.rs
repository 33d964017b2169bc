//! Statistics over frame columns
//!
//! The kernels in the submodules work on borrowed [`Sample`]s. The
//! [`DataFrame`] methods below resolve column names, check that the columns
//! are numeric, and hand the values to those kernels.

pub mod correlation;
pub mod descriptive;
pub mod parametric;

use std::collections::HashMap;

use crate::errors::{FrameError, FrameResult};
use crate::frame::DataFrame;
use crate::models::{fit_ols, predict};
use crate::types::{DescribeOptions, DescriptiveStats, LinearModel, OlsOptions, TTestResult};

/// Numeric values of one variable, labelled with the variable's name
#[derive(Debug, Clone, Copy)]
pub struct Sample<'a> {
    pub name: &'a str,
    pub values: &'a [f64],
}

impl<'a> Sample<'a> {
    pub fn new(name: &'a str, values: &'a [f64]) -> Self {
        Self { name, values }
    }
}

impl DataFrame {
    fn numeric_columns<S: AsRef<str>>(
        &self,
        names: &[S],
        operation: &'static str,
    ) -> FrameResult<Vec<Vec<f64>>> {
        names
            .iter()
            .map(|n| self.numeric_column(n.as_ref(), operation))
            .collect()
    }

    /// Descriptive statistics of `var` with the default percentiles (25, 50, 75)
    pub fn describe(&self, var: &str) -> FrameResult<DescriptiveStats> {
        self.describe_with(var, &DescribeOptions::default())
    }

    pub fn describe_with(
        &self,
        var: &str,
        options: &DescribeOptions,
    ) -> FrameResult<DescriptiveStats> {
        let values = self.numeric_column(var, "describe")?;
        descriptive::describe(&Sample::new(var, &values), options)
    }

    /// Two-tailed p-value of a one-sample t-test of `var` against `mu`
    pub fn one_sample_t_test(&self, var: &str, mu: f64) -> FrameResult<f64> {
        self.one_sample_t_test_detailed(var, mu).map(|r| r.p_value)
    }

    pub fn one_sample_t_test_detailed(&self, var: &str, mu: f64) -> FrameResult<TTestResult> {
        let values = self.numeric_column(var, "one_sample_t_test")?;
        parametric::one_sample_t_test(&Sample::new(var, &values), mu)
    }

    /// Two-tailed p-value of Welch's t-test comparing the means of `var1` and `var2`
    pub fn two_sample_t_test(&self, var1: &str, var2: &str) -> FrameResult<f64> {
        self.two_sample_t_test_detailed(var1, var2).map(|r| r.p_value)
    }

    pub fn two_sample_t_test_detailed(&self, var1: &str, var2: &str) -> FrameResult<TTestResult> {
        let first = self.numeric_column(var1, "two_sample_t_test")?;
        let second = self.numeric_column(var2, "two_sample_t_test")?;
        parametric::two_sample_t_test(&Sample::new(var1, &first), &Sample::new(var2, &second))
    }

    /// Pearson correlation of `var1` and `var2`; NaN if either has zero variance
    pub fn pearsons_correlation(&self, var1: &str, var2: &str) -> FrameResult<f64> {
        let x = self.numeric_column(var1, "pearsons_correlation")?;
        let y = self.numeric_column(var2, "pearsons_correlation")?;
        correlation::pearson(&Sample::new(var1, &x), &Sample::new(var2, &y))
    }

    /// Pairwise Pearson correlations, `matrix[i][j]` for `vars[i]` and `vars[j]`
    pub fn correlation_matrix<S: AsRef<str>>(&self, vars: &[S]) -> FrameResult<Vec<Vec<f64>>> {
        let columns = self.numeric_columns(vars, "correlation_matrix")?;
        let samples: Vec<Sample<'_>> = vars
            .iter()
            .zip(&columns)
            .map(|(n, v)| Sample::new(n.as_ref(), v))
            .collect();

        let k = samples.len();
        let mut matrix = vec![vec![f64::NAN; k]; k];
        for i in 0..k {
            for j in i..k {
                let r = correlation::pearson(&samples[i], &samples[j])?;
                matrix[i][j] = r;
                matrix[j][i] = r;
            }
        }
        Ok(matrix)
    }

    /// OLS coefficients of `dep` on an intercept plus `indep`.
    ///
    /// The intercept is reported under `"intercept"`.
    pub fn estimate_linear_model<S: AsRef<str>>(
        &self,
        dep: &str,
        indep: &[S],
    ) -> FrameResult<HashMap<String, f64>> {
        self.fit_with(dep, indep, &OlsOptions::default(), "estimate_linear_model")
            .map(|m| m.coefficient_map())
    }

    /// Full OLS fit with goodness-of-fit and, optionally, coefficient inference
    pub fn fit_linear_model<S: AsRef<str>>(
        &self,
        dep: &str,
        indep: &[S],
        options: &OlsOptions,
    ) -> FrameResult<LinearModel> {
        self.fit_with(dep, indep, options, "fit_linear_model")
    }

    fn fit_with<S: AsRef<str>>(
        &self,
        dep: &str,
        indep: &[S],
        options: &OlsOptions,
        operation: &'static str,
    ) -> FrameResult<LinearModel> {
        if indep.iter().any(|n| n.as_ref() == dep) {
            return Err(FrameError::SingularDesignMatrix {
                dependent: dep.to_string(),
                reason: format!("'{}' is also listed as an independent variable", dep),
                operation,
            });
        }
        let y = self.numeric_column(dep, operation)?;
        let columns = self.numeric_columns(indep, operation)?;
        let predictors: Vec<Sample<'_>> = indep
            .iter()
            .zip(&columns)
            .map(|(n, v)| Sample::new(n.as_ref(), v))
            .collect();
        fit_ols(&Sample::new(dep, &y), &predictors, options)
    }

    /// Fitted values of `model` for every row of this frame
    pub fn predict(&self, model: &LinearModel) -> FrameResult<Vec<f64>> {
        let names: Vec<&str> = model.predictors().map(|(n, _)| n).collect();
        let columns = self.numeric_columns(&names, "predict")?;
        let samples: Vec<Sample<'_>> = names
            .iter()
            .zip(&columns)
            .map(|(n, v)| Sample::new(n, v))
            .collect();

        if samples.is_empty() {
            let intercept = model.intercept().unwrap_or(0.0);
            return Ok(vec![intercept; self.row_count()]);
        }
        predict(model, &samples)
    }
}
