//! The seam between the layout composer and whatever paints the trend chart.

use serde::Serialize;

use crate::compute::ColorToken;
use crate::error::Result;

/// Inner margin of the chart band on every side, in px.
pub const CHART_MARGIN: f64 = 4.0;

/// Dash pattern of the hover crosshair.
pub const CROSSHAIR_DASH: &str = "5,2";

/// One plotted observation with its pre-formatted tooltip lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub date_label: String,
    pub value_label: String,
}

/// Everything a chart primitive needs to paint the trend band.
///
/// Points are in series order, which is chronological.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub points: Vec<ChartPoint>,
    /// Index into `points` of the highlighted observation (the latest one).
    pub highlight: Option<usize>,
    pub accent: ColorToken,
    pub gradient_id: String,
    pub aria_label: String,
}

impl ChartSpec {
    /// The highlighted point, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&ChartPoint> {
        self.highlight.and_then(|i| self.points.get(i))
    }
}

/// Paints a [`ChartSpec`] into markup that can be embedded in the tile.
pub trait ChartPrimitive {
    /// # Errors
    /// Returns an error if the chart cannot be drawn.
    fn draw(&self, spec: &ChartSpec) -> Result<String>;
}

impl<F> ChartPrimitive for F
where
    F: Fn(&ChartSpec) -> Result<String>,
{
    fn draw(&self, spec: &ChartSpec) -> Result<String> {
        self(spec)
    }
}
