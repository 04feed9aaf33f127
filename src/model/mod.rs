//! Render inputs and the transient computed result.
//!
//! `RenderPayload` is the validated form of the upstream query payload; see
//! [`payload`] for the boundary parsing of the raw JSON shape.

mod payload;

use serde::{Deserialize, Serialize};

use crate::compute::ColorToken;
use crate::error::{KpiError, Result};

pub use payload::RawPayload;

/// Default inner padding of the tile container, in px.
pub const CONTAINER_PADDING: f64 = 16.0;

/// Largest container width or height accepted, in px.
pub const MAX_DIMENSION: f64 = 20_000.0;

/// One observation of the KPI series.
///
/// `timestamp` is an epoch-millisecond value for time series, or the row index
/// for single-value payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: f64,
    pub value: f64,
}

impl TimeSeriesPoint {
    #[must_use]
    pub const fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Validated render input. Series order is chronological.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPayload {
    pub series: Vec<TimeSeriesPoint>,
    pub subheader: Option<String>,
    pub compare_lag: usize,
    pub compare_suffix: Option<String>,
}

impl RenderPayload {
    #[must_use]
    pub const fn new(series: Vec<TimeSeriesPoint>) -> Self {
        Self {
            series,
            subheader: None,
            compare_lag: 0,
            compare_suffix: None,
        }
    }

    /// Build a payload from `(timestamp, value)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(timestamp, value)| TimeSeriesPoint::new(timestamp, value))
                .collect(),
        )
    }

    #[must_use]
    pub fn with_subheader(mut self, subheader: impl Into<String>) -> Self {
        self.subheader = Some(subheader.into());
        self
    }

    #[must_use]
    pub const fn with_compare_lag(mut self, lag: usize) -> Self {
        self.compare_lag = lag;
        self
    }

    #[must_use]
    pub fn with_compare_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.compare_suffix = Some(suffix.into());
        self
    }

    /// Parse the upstream JSON payload.
    ///
    /// # Errors
    /// Returns `KpiError::Json` for invalid JSON and `KpiError::Schema` when the
    /// document does not match the payload schema.
    pub fn from_json(input: &str) -> Result<Self> {
        let raw: RawPayload = serde_json::from_str(input)?;
        raw.validate()
    }
}

/// Display mode of the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VizMode {
    /// Headline number only.
    #[serde(alias = "big_number_total")]
    Plain,
    /// Headline number with a trend chart below.
    #[default]
    #[serde(alias = "big_number")]
    Trendline,
}

impl VizMode {
    #[must_use]
    pub const fn shows_trendline(self) -> bool {
        matches!(self, Self::Trendline)
    }
}

impl std::str::FromStr for VizMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "big_number_total" => Ok(Self::Plain),
            "trendline" | "big_number" => Ok(Self::Trendline),
            _ => Err(format!("Unknown viz mode: {s}")),
        }
    }
}

/// Per-render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    pub viz_mode: VizMode,
    /// Number format preset name (d3-style spec, `smart_date`, or empty for the default).
    pub value_format: String,
    /// Interpret the headline as an actual/plan ratio.
    pub plan_fact: bool,
}

impl FormData {
    #[must_use]
    pub fn new(viz_mode: VizMode) -> Self {
        Self {
            viz_mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value_format(mut self, preset: impl Into<String>) -> Self {
        self.value_format = preset.into();
        self
    }

    #[must_use]
    pub const fn with_plan_fact(mut self, plan_fact: bool) -> Self {
        self.plan_fact = plan_fact;
        self
    }
}

/// Size of the container the tile must exactly fill, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ContainerGeometry {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: CONTAINER_PADDING,
        }
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Width left for content once padding is removed from both sides.
    #[must_use]
    pub fn available_width(&self) -> f64 {
        self.padding.mul_add(-2.0, self.width)
    }

    /// Reject sizes no layout can satisfy.
    ///
    /// # Errors
    /// Returns `KpiError::Geometry` for non-finite or non-positive dimensions,
    /// dimensions above [`MAX_DIMENSION`], negative padding, or padding that
    /// leaves no horizontal room.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(KpiError::Geometry(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(KpiError::Geometry(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(KpiError::Geometry(format!(
                "{}x{} exceeds the {MAX_DIMENSION}px limit",
                self.width, self.height
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(KpiError::Geometry(format!(
                "padding must be non-negative, got {}",
                self.padding
            )));
        }
        if self.available_width() <= 0.0 {
            return Err(KpiError::Geometry(format!(
                "padding {} leaves no room in width {}",
                self.padding, self.width
            )));
        }
        Ok(())
    }
}

impl Default for ContainerGeometry {
    fn default() -> Self {
        Self::new(400.0, 300.0)
    }
}

/// Values and strings computed for one render call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedResult {
    pub headline_value: f64,
    pub comparison_value: Option<f64>,
    pub percent_change: Option<f64>,
    pub color: ColorToken,
    pub headline_text: String,
    pub subheader_text: Option<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
