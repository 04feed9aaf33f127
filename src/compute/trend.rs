//! Headline value and period-over-period delta extraction.

use serde::Serialize;

use crate::error::{KpiError, Result};
use crate::model::{TimeSeriesPoint, VizMode};

/// Numbers derived from the series for one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSummary {
    /// The number to display. In trendline mode with a usable comparison this is
    /// the delta `latest - comparison`, not the latest observation.
    pub headline_value: f64,
    /// Baseline value `compare_lag` periods before the latest point.
    pub comparison_value: Option<f64>,
    /// `delta / |comparison|`, or exactly 0 when the comparison is 0.
    pub percent_change: Option<f64>,
}

impl TrendSummary {
    /// The computed delta, present only when a comparison was made.
    #[must_use]
    pub fn delta(&self) -> Option<f64> {
        self.comparison_value.map(|_| self.headline_value)
    }
}

/// Collapse the series into the headline value and optional comparison.
///
/// - Plain mode: first point's value; later points are ignored.
/// - Trendline mode: last point's value. When `compare_lag > 0` and the series
///   holds a point `compare_lag` periods back, the headline becomes the delta
///   against it.
///
/// # Errors
/// Returns `KpiError::InsufficientData` if the series is empty.
pub fn extract_trend(
    series: &[TimeSeriesPoint],
    viz_mode: VizMode,
    compare_lag: usize,
) -> Result<TrendSummary> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(KpiError::InsufficientData(
                "series has no points".to_string(),
            ));
        }
    };

    if !viz_mode.shows_trendline() {
        return Ok(TrendSummary {
            headline_value: first.value,
            comparison_value: None,
            percent_change: None,
        });
    }

    let latest = last.value;
    let mut summary = TrendSummary {
        headline_value: latest,
        comparison_value: None,
        percent_change: None,
    };

    if compare_lag == 0 {
        return Ok(summary);
    }

    // compare_index = len - 1 - lag, skipped when negative
    let Some(compare_index) = (series.len() - 1).checked_sub(compare_lag) else {
        tracing::warn!(
            compare_lag,
            points = series.len(),
            "Not enough history for comparison, showing latest value"
        );
        return Ok(summary);
    };

    let comparison = series[compare_index].value;
    let delta = latest - comparison;
    summary.headline_value = delta;
    summary.comparison_value = Some(comparison);
    summary.percent_change = Some(if comparison == 0.0 {
        0.0
    } else {
        delta / comparison.abs()
    });

    Ok(summary)
}

#[cfg(test)]
#[path = "trend_tests.rs"]
mod tests;
