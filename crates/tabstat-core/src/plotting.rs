//! Hand-off of column data to a charting backend
//!
//! Rendering is not done here. A [`ChartBackend`] receives numeric series
//! (scatter) or raw values and a bin count (histogram) and returns its own
//! chart type, which it can also save or display.

use std::path::Path;

use tracing::debug;

use crate::errors::{FrameError, FrameResult};
use crate::frame::DataFrame;

/// Renders, saves and displays charts built from frame columns
pub trait ChartBackend {
    type Chart;

    /// Scatter plot of paired `x` and `y` (equal length)
    fn scatter(&self, title: &str, x: &[f64], y: &[f64]) -> Self::Chart;

    /// Histogram of `values` over `bins` bins; `bins` is at least 1
    fn histogram(&self, title: &str, values: &[f64], bins: usize) -> Self::Chart;

    /// Write `chart` to `path`
    fn save(&self, chart: &Self::Chart, path: &Path) -> std::io::Result<()>;

    /// Show `chart` in an interactive window
    fn display(&self, chart: Self::Chart);
}

/// Equal-width histogram bins
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    /// Bin width
    pub bin_width: f64,
    /// Bin edges (length = bins + 1)
    pub edges: Vec<f64>,
    /// Count of observations in each bin
    pub counts: Vec<usize>,
}

/// Split the range of `values` into `bins` equal-width bins and count each.
///
/// The last bin is closed on the right so the maximum is counted. Returns
/// `None` for empty input, zero bins or non-finite values. When every value
/// is equal the single point is placed in a unit-width range around it.
pub fn histogram_bins(values: &[f64], bins: usize) -> Option<HistogramBins> {
    if values.is_empty() || bins == 0 || values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };

    let bin_width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * bin_width).collect();

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / bin_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Some(HistogramBins {
        bin_width,
        edges,
        counts,
    })
}

impl DataFrame {
    fn scatter_series(
        &self,
        x_var: &str,
        y_var: &str,
        operation: &'static str,
    ) -> FrameResult<(Vec<f64>, Vec<f64>)> {
        let x = self.numeric_column(x_var, operation)?;
        let y = self.numeric_column(y_var, operation)?;
        Ok((x, y))
    }

    fn histogram_values(
        &self,
        var: &str,
        bins: usize,
        operation: &'static str,
    ) -> FrameResult<Vec<f64>> {
        if bins == 0 {
            return Err(FrameError::InvalidArgument {
                name: "bins".into(),
                reason: "histogram needs at least one bin".into(),
                operation,
            });
        }
        self.numeric_column(var, operation)
    }

    /// Scatter plot of column `x_var` against column `y_var`
    pub fn scatter<B: ChartBackend>(
        &self,
        backend: &B,
        title: &str,
        x_var: &str,
        y_var: &str,
    ) -> FrameResult<B::Chart> {
        let (x, y) = self.scatter_series(x_var, y_var, "scatter")?;
        Ok(backend.scatter(title, &x, &y))
    }

    /// Render a scatter plot and write it to `path`
    pub fn save_scatter<B: ChartBackend>(
        &self,
        backend: &B,
        path: &Path,
        title: &str,
        x_var: &str,
        y_var: &str,
    ) -> FrameResult<()> {
        let (x, y) = self.scatter_series(x_var, y_var, "save_scatter")?;
        let chart = backend.scatter(title, &x, &y);
        backend.save(&chart, path)?;
        debug!(path = %path.display(), x = x_var, y = y_var, "Saved scatter plot");
        Ok(())
    }

    /// Render a scatter plot and show it
    pub fn show_scatter<B: ChartBackend>(
        &self,
        backend: &B,
        title: &str,
        x_var: &str,
        y_var: &str,
    ) -> FrameResult<()> {
        let (x, y) = self.scatter_series(x_var, y_var, "show_scatter")?;
        backend.display(backend.scatter(title, &x, &y));
        Ok(())
    }

    /// Histogram of column `var` over `bins` bins
    pub fn histogram<B: ChartBackend>(
        &self,
        backend: &B,
        title: &str,
        var: &str,
        bins: usize,
    ) -> FrameResult<B::Chart> {
        let values = self.histogram_values(var, bins, "histogram")?;
        Ok(backend.histogram(title, &values, bins))
    }

    /// Render a histogram and write it to `path`
    pub fn save_histogram<B: ChartBackend>(
        &self,
        backend: &B,
        path: &Path,
        title: &str,
        var: &str,
        bins: usize,
    ) -> FrameResult<()> {
        let values = self.histogram_values(var, bins, "save_histogram")?;
        let chart = backend.histogram(title, &values, bins);
        backend.save(&chart, path)?;
        debug!(path = %path.display(), var, bins, "Saved histogram");
        Ok(())
    }

    /// Render a histogram and show it
    pub fn show_histogram<B: ChartBackend>(
        &self,
        backend: &B,
        title: &str,
        var: &str,
        bins: usize,
    ) -> FrameResult<()> {
        let values = self.histogram_values(var, bins, "show_histogram")?;
        backend.display(backend.histogram(title, &values, bins));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    #[derive(Debug, Clone, PartialEq)]
    enum Chart {
        Scatter {
            title: String,
            x: Vec<f64>,
            y: Vec<f64>,
        },
        Histogram {
            title: String,
            values: Vec<f64>,
            bins: usize,
        },
    }

    /// Records every call instead of drawing
    #[derive(Default)]
    struct RecordingBackend {
        saved: RefCell<Vec<(Chart, PathBuf)>>,
        displayed: RefCell<Vec<Chart>>,
        fail_saves: bool,
    }

    impl ChartBackend for RecordingBackend {
        type Chart = Chart;

        fn scatter(&self, title: &str, x: &[f64], y: &[f64]) -> Chart {
            Chart::Scatter {
                title: title.into(),
                x: x.to_vec(),
                y: y.to_vec(),
            }
        }

        fn histogram(&self, title: &str, values: &[f64], bins: usize) -> Chart {
            Chart::Histogram {
                title: title.into(),
                values: values.to_vec(),
                bins,
            }
        }

        fn save(&self, chart: &Chart, path: &Path) -> io::Result<()> {
            if self.fail_saves {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.saved.borrow_mut().push((chart.clone(), path.to_path_buf()));
            Ok(())
        }

        fn display(&self, chart: Chart) {
            self.displayed.borrow_mut().push(chart);
        }
    }

    fn frame() -> DataFrame {
        DataFrame::from_columns([
            ("v", Column::from(vec![1.0, 1.0, 2.0, 2.0])),
            ("w", Column::from(vec![4i64, 3, 2, 1])),
            ("tag", Column::from(vec!["a", "b", "c", "d"])),
        ])
        .unwrap()
    }

    #[test]
    fn test_histogram_receives_values_unmodified() {
        let backend = RecordingBackend::default();
        let chart = frame().histogram(&backend, "v dist", "v", 2).unwrap();
        assert_eq!(
            chart,
            Chart::Histogram {
                title: "v dist".into(),
                values: vec![1.0, 1.0, 2.0, 2.0],
                bins: 2,
            }
        );
    }

    #[test]
    fn test_scatter_pairs_columns() {
        let backend = RecordingBackend::default();
        let chart = frame().scatter(&backend, "v vs w", "v", "w").unwrap();
        assert_eq!(
            chart,
            Chart::Scatter {
                title: "v vs w".into(),
                x: vec![1.0, 1.0, 2.0, 2.0],
                y: vec![4.0, 3.0, 2.0, 1.0],
            }
        );
    }

    #[test]
    fn test_save_and_show() {
        let backend = RecordingBackend::default();
        let df = frame();
        df.save_scatter(&backend, Path::new("out.png"), "t", "v", "w")
            .unwrap();
        df.show_histogram(&backend, "h", "w", 3).unwrap();

        let saved = backend.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, PathBuf::from("out.png"));
        assert!(matches!(backend.displayed.borrow()[0], Chart::Histogram { bins: 3, .. }));
    }

    #[test]
    fn test_save_propagates_io_error() {
        let backend = RecordingBackend {
            fail_saves: true,
            ..Default::default()
        };
        let result = frame().save_histogram(&backend, Path::new("h.png"), "h", "v", 2);
        match result {
            Err(FrameError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_bins_and_text() {
        let backend = RecordingBackend::default();
        let df = frame();
        assert!(matches!(
            df.histogram(&backend, "h", "v", 0),
            Err(FrameError::InvalidArgument { .. })
        ));
        assert!(matches!(
            df.scatter(&backend, "s", "v", "tag"),
            Err(FrameError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_histogram_bins() {
        let bins = histogram_bins(&[1.0, 1.0, 2.0, 2.0], 2).unwrap();
        assert_eq!(bins.counts, vec![2, 2]);
        assert_eq!(bins.edges, vec![1.0, 1.5, 2.0]);

        let bins = histogram_bins(&[0.0, 1.0, 2.0, 3.0, 10.0], 5).unwrap();
        assert_eq!(bins.counts.iter().sum::<usize>(), 5);
        assert_eq!(bins.counts[4], 1);
    }

    #[test]
    fn test_histogram_bins_degenerate() {
        assert!(histogram_bins(&[], 3).is_none());
        assert!(histogram_bins(&[1.0], 0).is_none());
        assert!(histogram_bins(&[1.0, f64::NAN], 2).is_none());

        let bins = histogram_bins(&[5.0, 5.0], 1).unwrap();
        assert_eq!(bins.counts, vec![2]);
    }
}
