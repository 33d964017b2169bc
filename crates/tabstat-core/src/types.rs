use std::collections::HashMap;
use std::fmt;

/// Element type of a stored column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit floating point values
    Numeric,
    /// 64-bit signed integers (numeric-capable, widened to `f64` for statistics)
    Integer,
    /// True/false values
    Boolean,
    /// Free-form strings
    Text,
}

impl DataType {
    /// Whether statistics can be computed over columns of this type
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric | Self::Integer)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => write!(f, "Numeric"),
            Self::Integer => write!(f, "Integer"),
            Self::Boolean => write!(f, "Boolean"),
            Self::Text => write!(f, "Text"),
        }
    }
}

/// A single cell value, as exposed by column and row views
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Numeric(f64),
    Integer(i64),
    Boolean(bool),
    Text(String),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Numeric(_) => DataType::Numeric,
            Self::Integer(_) => DataType::Integer,
            Self::Boolean(_) => DataType::Boolean,
            Self::Text(_) => DataType::Text,
        }
    }

    /// Numeric value of this cell, `None` for booleans and text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the decimal point on whole floats ("1.0", not "1")
            Self::Numeric(v) => write!(f, "{:?}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// A homogeneous column of values
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Integer(Vec<i64>),
    Boolean(Vec<bool>),
    Text(Vec<String>),
}

impl Column {
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Numeric(_) => DataType::Numeric,
            Self::Integer(_) => DataType::Integer,
            Self::Boolean(_) => DataType::Boolean,
            Self::Text(_) => DataType::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Integer(v) => v.len(),
            Self::Boolean(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at row `idx`, or `None` past the end of the column
    pub fn value(&self, idx: usize) -> Option<Value> {
        match self {
            Self::Numeric(v) => v.get(idx).copied().map(Value::Numeric),
            Self::Integer(v) => v.get(idx).copied().map(Value::Integer),
            Self::Boolean(v) => v.get(idx).copied().map(Value::Boolean),
            Self::Text(v) => v.get(idx).cloned().map(Value::Text),
        }
    }

    /// All values in row order
    pub fn values(&self) -> Vec<Value> {
        (0..self.len()).filter_map(|i| self.value(i)).collect()
    }

    /// Numeric contents widened to `f64`, or `None` if the column is not numeric
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            Self::Numeric(v) => Some(v.clone()),
            Self::Integer(v) => Some(v.iter().map(|&x| x as f64).collect()),
            _ => None,
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<Vec<i64>> for Column {
    fn from(values: Vec<i64>) -> Self {
        Self::Integer(values)
    }
}

impl From<Vec<bool>> for Column {
    fn from(values: Vec<bool>) -> Self {
        Self::Boolean(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Self::Text(values.into_iter().map(String::from).collect())
    }
}

/// Descriptive statistics for one numeric column
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// Number of values
    pub count: usize,
    /// Sum of values
    pub sum: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample variance (denominator n - 1)
    pub variance: f64,
    /// Population variance (denominator n)
    pub population_variance: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Bias-corrected sample skewness (NaN below 3 values)
    pub skewness: f64,
    /// Bias-corrected excess kurtosis (NaN below 4 values)
    pub kurtosis: f64,
    /// Geometric mean (NaN if any value is negative)
    pub geometric_mean: f64,
    /// 50th percentile
    pub median: f64,
    /// Requested percentiles as (p, value) pairs, p in (0, 100]
    pub percentiles: Vec<(f64, f64)>,
}

impl DescriptiveStats {
    /// Look up a percentile that was requested when the statistics were computed
    pub fn percentile(&self, p: f64) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|(q, _)| (q - p).abs() < 1e-12)
            .map(|(_, v)| *v)
    }
}

/// Options for descriptive statistics
#[derive(Debug, Clone)]
pub struct DescribeOptions {
    /// Percentiles to report, each in (0, 100]
    pub percentiles: Vec<f64>,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            percentiles: vec![25.0, 50.0, 75.0],
        }
    }
}

/// Outcome of a Student's t-test
#[derive(Debug, Clone)]
pub struct TTestResult {
    /// t statistic
    pub statistic: f64,
    /// Degrees of freedom (fractional for Welch's test)
    pub df: f64,
    /// Two-tailed p-value
    pub p_value: f64,
    /// Difference of means (sample mean minus mu, or mean1 minus mean2)
    pub mean_difference: f64,
    /// Observations per sample (n2 is 0 for one-sample tests)
    pub n1: usize,
    pub n2: usize,
    /// Test method
    pub method: String,
}

/// Options for OLS fitting
#[derive(Debug, Clone)]
pub struct OlsOptions {
    /// Also report standard errors, t-values, p-values and intervals
    pub compute_inference: bool,
    /// Coverage of the coefficient intervals, strictly between 0 and 1
    pub confidence_level: f64,
}

impl Default for OlsOptions {
    fn default() -> Self {
        Self {
            compute_inference: false,
            confidence_level: 0.95,
        }
    }
}

/// Key under which the intercept is reported
pub const INTERCEPT: &str = "intercept";

/// Per-coefficient inference, parallel to `LinearModel::coefficients`
#[derive(Debug, Clone)]
pub struct CoefficientInference {
    pub std_errors: Vec<f64>,
    pub t_values: Vec<f64>,
    pub p_values: Vec<f64>,
    pub ci_lower: Vec<f64>,
    pub ci_upper: Vec<f64>,
    pub confidence_level: f64,
}

/// Fitted OLS model with intercept
#[derive(Debug, Clone)]
pub struct LinearModel {
    /// Name of the dependent variable
    pub dependent: String,
    /// (name, coefficient) pairs, intercept first, then predictors in the
    /// order they were requested
    pub coefficients: Vec<(String, f64)>,
    /// R-squared (coefficient of determination)
    pub r_squared: f64,
    /// Adjusted R-squared
    pub adj_r_squared: f64,
    /// Residual standard error
    pub residual_std_error: f64,
    /// Observed minus fitted values
    pub residuals: Vec<f64>,
    pub n_observations: usize,
    /// Number of predictors (excluding intercept)
    pub n_features: usize,
    pub inference: Option<CoefficientInference>,
}

impl LinearModel {
    /// Intercept, or `None` for a model built without one
    pub fn intercept(&self) -> Option<f64> {
        self.coefficient(INTERCEPT)
    }

    /// Predictor coefficients in fit order, intercept excluded
    pub fn predictors(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.coefficients
            .iter()
            .filter(|(n, _)| n != INTERCEPT)
            .map(|(n, c)| (n.as_str(), *c))
    }

    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.coefficients
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }

    /// Coefficients keyed by variable name, intercept under [`INTERCEPT`]
    pub fn coefficient_map(&self) -> HashMap<String, f64> {
        self.coefficients.iter().cloned().collect()
    }
}
