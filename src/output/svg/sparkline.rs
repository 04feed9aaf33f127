//! Default trend chart: gradient-filled area sparkline with a highlighted latest
//! point and a hover crosshair per observation.

use super::builder::SvgBuilder;
use super::element::{HoverColumn, Line, LinearGradient, Marker};
use super::style::ChartColor;
use crate::error::{KpiError, Result};
use crate::output::chart::{CROSSHAIR_DASH, ChartPrimitive, ChartSpec};

/// Crosshair elements stay hidden until their column is hovered.
const HOVER_STYLE: &str = ".kpi-crosshair{opacity:0}.kpi-hover:hover .kpi-crosshair{opacity:1}";

/// Bottom color of the area gradient.
const GRADIENT_END: &str = "#fff";

/// Built-in [`ChartPrimitive`] producing a self-contained `<svg>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgSparkline;

/// Linear mapping of data space into the chart's inner box.
///
/// Neither axis is forced to include zero. A degenerate domain maps to the
/// middle of its range.
#[derive(Debug, Clone, Copy)]
struct Scale {
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
    left: f64,
    top: f64,
    inner_width: f64,
    inner_height: f64,
}

impl Scale {
    fn fit(spec: &ChartSpec) -> Self {
        let (x_min, x_max) = bounds(spec.points.iter().map(|p| p.x));
        let (y_min, y_max) = bounds(spec.points.iter().map(|p| p.y));
        Self {
            x_min,
            x_span: x_max - x_min,
            y_min,
            y_span: y_max - y_min,
            left: spec.margin,
            top: spec.margin,
            inner_width: spec.margin.mul_add(-2.0, spec.width).max(0.0),
            inner_height: spec.margin.mul_add(-2.0, spec.height).max(0.0),
        }
    }

    fn x(&self, value: f64) -> f64 {
        let t = if self.x_span > 0.0 {
            (value - self.x_min) / self.x_span
        } else {
            0.5
        };
        t.mul_add(self.inner_width, self.left)
    }

    fn y(&self, value: f64) -> f64 {
        let t = if self.y_span > 0.0 {
            (value - self.y_min) / self.y_span
        } else {
            0.5
        };
        // SVG y grows downward
        (1.0 - t).mul_add(self.inner_height, self.top)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

impl SvgSparkline {
    fn check(spec: &ChartSpec) -> Result<()> {
        if spec.points.is_empty() {
            return Err(KpiError::InsufficientData(
                "trend chart needs at least one point".to_string(),
            ));
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !(positive(spec.width) && positive(spec.height)) {
            return Err(KpiError::Geometry(format!(
                "chart band is {}x{}",
                spec.width, spec.height
            )));
        }
        if let Some(point) = spec
            .points
            .iter()
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(KpiError::Schema(format!(
                "chart point ({}, {}) is not finite",
                point.x, point.y
            )));
        }
        Ok(())
    }

    /// Hit areas split the band at the midpoints between neighbouring points.
    fn hover_columns(
        spec: &ChartSpec,
        coords: &[(f64, f64)],
        accent: &ChartColor,
    ) -> Vec<HoverColumn> {
        coords
            .iter()
            .zip(&spec.points)
            .enumerate()
            .map(|(i, (&(x, y), point))| {
                let left = i
                    .checked_sub(1)
                    .and_then(|prev| coords.get(prev))
                    .map_or(0.0, |&(prev_x, _)| f64::midpoint(prev_x, x));
                let right = coords
                    .get(i + 1)
                    .map_or(spec.width, |&(next_x, _)| f64::midpoint(x, next_x));
                HoverColumn {
                    left,
                    width: (right - left).max(0.0),
                    height: spec.height,
                    x,
                    y,
                    color: accent.clone(),
                    dash: CROSSHAIR_DASH.to_string(),
                    tooltip: vec![point.date_label.clone(), point.value_label.clone()],
                }
            })
            .collect()
    }
}

impl ChartPrimitive for SvgSparkline {
    fn draw(&self, spec: &ChartSpec) -> Result<String> {
        Self::check(spec)?;

        let scale = Scale::fit(spec);
        let accent = ChartColor::from(spec.accent);
        let coords: Vec<(f64, f64)> = spec
            .points
            .iter()
            .map(|p| (scale.x(p.x), scale.y(p.y)))
            .collect();
        let baseline_y = spec.height - spec.margin;

        let gradient = LinearGradient {
            id: spec.gradient_id.clone(),
            from: accent.clone(),
            to: ChartColor::hex(GRADIENT_END),
        };
        let line = Line::new(coords.clone(), accent.clone())
            .with_area(ChartColor::gradient(&spec.gradient_id), baseline_y);

        let mut builder = SvgBuilder::new(spec.width, spec.height)
            .with_fixed_size()
            .with_title(&spec.aria_label)
            .with_style(HOVER_STYLE)
            .push_element(&gradient)
            .push_element(&line);

        if let Some(&(x, y)) = spec.highlight.and_then(|i| coords.get(i)) {
            builder = builder.push_element(&Marker::new(x, y, accent.clone()));
        }
        for column in Self::hover_columns(spec, &coords, &accent) {
            builder = builder.push_element(&column);
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
#[path = "sparkline_tests.rs"]
mod tests;
