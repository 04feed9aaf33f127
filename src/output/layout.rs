//! Layout composer: fits the text bands and stacks headline, chart and
//! subheader inside the padded container.
//!
//! Bands, top to bottom:
//! - headline: line-height 1em, padded 0.37em above and 0.10em below;
//! - chart: trendline mode only, 0.20 × container height;
//! - subheader: only when there is subheader text, padded 0.5em above and below.
//!
//! The stack is centred vertically in the area left after padding. Content
//! taller than that area overflows evenly at the top and bottom.

use serde::Serialize;

use super::chart::{CHART_MARGIN, ChartPoint, ChartSpec};
use crate::compute::{ColorToken, FontWeight, TextMeasurer, fit_font_size};
use crate::error::Result;
use crate::format::KpiFormatter;
use crate::model::{ComputedResult, ContainerGeometry, FormData, RenderPayload};

/// Ideal headline size as a fraction of container height.
pub const NUMBER_SIZE_RATIO: f64 = 0.34;

/// Chart band height as a fraction of container height.
pub const CHART_HEIGHT_RATIO: f64 = 0.2;

/// Ideal subheader size as a fraction of container height.
pub const TEXT_SIZE_RATIO: f64 = 0.2;

pub const HEADLINE_WEIGHT: FontWeight = FontWeight::SemiBold;
pub const SUBHEADER_WEIGHT: FontWeight = FontWeight::Light;

const LINE_HEIGHT_EM: f64 = 1.0;
const HEADLINE_PAD_TOP_EM: f64 = 0.37;
const HEADLINE_PAD_BOTTOM_EM: f64 = 0.10;
const SUBHEADER_PAD_EM: f64 = 0.5;

const ARIA_PREFIX: &str = "Big number visualization";

/// A single line of centred text and its box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBand {
    pub text: String,
    pub font_size: f64,
    pub weight: FontWeight,
    /// Top of the band, from the top of the container.
    pub y: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl TextBand {
    fn new(
        text: String,
        font_size: f64,
        weight: FontWeight,
        pad_top_em: f64,
        pad_bottom_em: f64,
    ) -> Self {
        let padding_top = pad_top_em * font_size;
        let padding_bottom = pad_bottom_em * font_size;
        Self {
            text,
            font_size,
            weight,
            y: 0.0,
            height: LINE_HEIGHT_EM.mul_add(font_size, padding_top + padding_bottom),
            padding_top,
            padding_bottom,
        }
    }

    /// Vertical centre of the line box.
    #[must_use]
    pub fn line_center(&self) -> f64 {
        self.y + self.padding_top + LINE_HEIGHT_EM * self.font_size / 2.0
    }
}

/// The trend chart band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBand {
    pub y: f64,
    pub height: f64,
    #[serde(skip)]
    pub spec: ChartSpec,
}

/// Fully arranged tile, ready for a writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiLayout {
    pub container_id: String,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub available_width: f64,
    pub accent: ColorToken,
    pub headline: TextBand,
    pub chart: Option<ChartBand>,
    pub subheader: Option<TextBand>,
    pub content_height: f64,
}

impl KpiLayout {
    /// Horizontal centre of the text bands.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// Arrange a computed result inside `geometry`.
///
/// # Errors
/// Propagates `KpiError::Measurement` from font fitting and `KpiError::Format`
/// from formatting chart tooltips.
pub fn compose(
    result: &ComputedResult,
    payload: &RenderPayload,
    form: &FormData,
    geometry: &ContainerGeometry,
    container_id: &str,
    formatter: &dyn KpiFormatter,
    measurer: &dyn TextMeasurer,
) -> Result<KpiLayout> {
    let available_width = geometry.available_width();

    let headline_size = fit_font_size(
        &result.headline_text,
        available_width,
        geometry.height * NUMBER_SIZE_RATIO,
        HEADLINE_WEIGHT,
        measurer,
    )?;
    let mut headline = TextBand::new(
        result.headline_text.clone(),
        headline_size,
        HEADLINE_WEIGHT,
        HEADLINE_PAD_TOP_EM,
        HEADLINE_PAD_BOTTOM_EM,
    );

    let mut chart = if form.viz_mode.shows_trendline() {
        Some(ChartBand {
            y: 0.0,
            height: geometry.height * CHART_HEIGHT_RATIO,
            spec: chart_spec(
                result,
                payload,
                available_width,
                geometry.height * CHART_HEIGHT_RATIO,
                container_id,
                formatter,
            )?,
        })
    } else {
        None
    };

    let mut subheader = match result.subheader_text.as_deref() {
        Some(text) if !text.is_empty() => {
            let size = fit_font_size(
                text,
                available_width,
                geometry.height * TEXT_SIZE_RATIO,
                SUBHEADER_WEIGHT,
                measurer,
            )?;
            Some(TextBand::new(
                text.to_string(),
                size,
                SUBHEADER_WEIGHT,
                SUBHEADER_PAD_EM,
                SUBHEADER_PAD_EM,
            ))
        }
        _ => None,
    };

    let content_height = headline.height
        + chart.as_ref().map_or(0.0, |band| band.height)
        + subheader.as_ref().map_or(0.0, |band| band.height);
    let inner_height = geometry.padding.mul_add(-2.0, geometry.height);
    let mut cursor = geometry.padding + (inner_height - content_height) / 2.0;

    headline.y = cursor;
    cursor += headline.height;
    if let Some(band) = chart.as_mut() {
        band.y = cursor;
        cursor += band.height;
    }
    if let Some(band) = subheader.as_mut() {
        band.y = cursor;
    }

    tracing::debug!(
        headline_size,
        subheader_size = subheader.as_ref().map(|band| band.font_size),
        content_height,
        inner_height,
        "Composed tile layout"
    );

    Ok(KpiLayout {
        container_id: container_id.to_string(),
        width: geometry.width,
        height: geometry.height,
        padding: geometry.padding,
        available_width,
        accent: result.color,
        headline,
        chart,
        subheader,
        content_height,
    })
}

fn chart_spec(
    result: &ComputedResult,
    payload: &RenderPayload,
    width: f64,
    height: f64,
    container_id: &str,
    formatter: &dyn KpiFormatter,
) -> Result<ChartSpec> {
    let points = payload
        .series
        .iter()
        .map(|point| {
            Ok(ChartPoint {
                x: point.timestamp,
                y: point.value,
                date_label: formatter.format_date(point.timestamp)?,
                value_label: formatter.format_value(point.value)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let aria_label = match payload.subheader.as_deref().map(str::trim) {
        Some(subheader) if !subheader.is_empty() => format!("{ARIA_PREFIX} {subheader}"),
        _ => ARIA_PREFIX.to_string(),
    };

    Ok(ChartSpec {
        width,
        height,
        margin: CHART_MARGIN,
        highlight: points.len().checked_sub(1),
        points,
        accent: result.color,
        gradient_id: format!("big_number_{container_id}"),
        aria_label,
    })
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
