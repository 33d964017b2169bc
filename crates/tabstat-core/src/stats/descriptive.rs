//! Descriptive statistics

use super::Sample;
use crate::errors::{FrameError, FrameResult};
use crate::types::{DescribeOptions, DescriptiveStats};

/// Summary statistics over every value of the sample.
///
/// No values are skipped. An empty sample yields a count of 0 and NaN for
/// every statistic; a single value has variance 0.
pub fn describe(sample: &Sample<'_>, options: &DescribeOptions) -> FrameResult<DescriptiveStats> {
    for &p in &options.percentiles {
        if !(p > 0.0 && p <= 100.0) {
            return Err(FrameError::InvalidArgument {
                name: "percentiles".into(),
                reason: format!("{} is outside (0, 100]", p),
                operation: "describe",
            });
        }
    }

    let data = sample.values;
    let n = data.len();
    let nf = n as f64;

    if n == 0 {
        return Ok(DescriptiveStats {
            count: 0,
            sum: 0.0,
            mean: f64::NAN,
            variance: f64::NAN,
            population_variance: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            skewness: f64::NAN,
            kurtosis: f64::NAN,
            geometric_mean: f64::NAN,
            median: f64::NAN,
            percentiles: options.percentiles.iter().map(|&p| (p, f64::NAN)).collect(),
        });
    }

    let sum: f64 = data.iter().sum();
    let mean = sum / nf;

    // Central moments
    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &x in data {
        let d = x - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }

    let variance = if n > 1 { m2 / (nf - 1.0) } else { 0.0 };
    let std_dev = variance.sqrt();

    let skewness = if n < 3 || variance == 0.0 {
        f64::NAN
    } else {
        nf / ((nf - 1.0) * (nf - 2.0)) * m3 / (variance * std_dev)
    };

    let kurtosis = if n < 4 || variance == 0.0 {
        f64::NAN
    } else {
        let lead = nf * (nf + 1.0) / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0));
        let tail = 3.0 * (nf - 1.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0));
        lead * m4 / (variance * variance) - tail
    };

    let geometric_mean = if data.iter().any(|&x| x < 0.0) {
        f64::NAN
    } else {
        (data.iter().map(|x| x.ln()).sum::<f64>() / nf).exp()
    };

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(DescriptiveStats {
        count: n,
        sum,
        mean,
        variance,
        population_variance: m2 / nf,
        std_dev,
        min: sorted[0],
        max: sorted[n - 1],
        skewness,
        kurtosis,
        geometric_mean,
        median: percentile_sorted(&sorted, 50.0),
        percentiles: options
            .percentiles
            .iter()
            .map(|&p| (p, percentile_sorted(&sorted, p)))
            .collect(),
    })
}

/// Percentile `p` in (0, 100] of ascending, non-empty `sorted`.
///
/// Position is `p * (n + 1) / 100` (1-based); positions below 1 give the
/// minimum, positions at or past `n` give the maximum, anything in between
/// interpolates linearly between its neighbours.
pub(crate) fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = p * (n as f64 + 1.0) / 100.0;
    if pos < 1.0 {
        return sorted[0];
    }
    if pos >= n as f64 {
        return sorted[n - 1];
    }

    let lower = pos.floor();
    let frac = pos - lower;
    let i = lower as usize - 1;
    sorted[i] + frac * (sorted[i + 1] - sorted[i])
}
