//! The render entry point.
//!
//! A render is a pure function of its inputs and the injected services: it
//! extracts the trend, picks the accent color, formats the text, composes the
//! layout, writes the markup, and only then replaces the target's content.

use crate::compute::{HeuristicMeasurer, TextMeasurer, choose_color, extract_trend};
use crate::error::Result;
use crate::format::{KpiFormatter, PresetFormatter};
use crate::model::{ComputedResult, ContainerGeometry, FormData, RenderPayload};
use crate::output::svg::SvgSparkline;
use crate::output::{ChartPrimitive, KpiLayout, MountTarget, OutputFormat, TileWriter, compose};

/// Formatting, measurement, and chart services used by one render.
#[derive(Clone, Copy)]
pub struct RenderServices<'a> {
    pub formatter: &'a dyn KpiFormatter,
    pub measurer: &'a dyn TextMeasurer,
    pub chart: &'a dyn ChartPrimitive,
}

impl<'a> RenderServices<'a> {
    /// Services with the built-in measurer and sparkline.
    #[must_use]
    pub fn new(formatter: &'a dyn KpiFormatter) -> Self {
        Self {
            formatter,
            measurer: &HeuristicMeasurer,
            chart: &SvgSparkline,
        }
    }

    #[must_use]
    pub fn with_measurer(mut self, measurer: &'a dyn TextMeasurer) -> Self {
        self.measurer = measurer;
        self
    }

    #[must_use]
    pub fn with_chart(mut self, chart: &'a dyn ChartPrimitive) -> Self {
        self.chart = chart;
        self
    }
}

impl std::fmt::Debug for RenderServices<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderServices").finish_non_exhaustive()
    }
}

/// Derive the headline, comparison, color, and display strings.
///
/// # Errors
/// Returns `KpiError::InsufficientData` for an empty series and propagates
/// formatter failures.
pub fn compute_result(
    payload: &RenderPayload,
    form: &FormData,
    formatter: &dyn KpiFormatter,
) -> Result<ComputedResult> {
    let summary = extract_trend(&payload.series, form.viz_mode, payload.compare_lag)?;
    let color = choose_color(form.plan_fact, summary.headline_value, summary.delta());
    let headline_text = formatter.format_value(summary.headline_value)?;

    let label = if form.viz_mode.shows_trendline() {
        payload.compare_suffix.as_deref()
    } else {
        payload.subheader.as_deref()
    };
    let subheader_text = match summary.percent_change {
        Some(change) => {
            let suffix = payload.compare_suffix.as_deref().unwrap_or_default().trim();
            let text = format!("{} {suffix}", formatter.format_percent(change)?);
            Some(text.trim_end().to_string())
        }
        None => label.map(str::to_string),
    }
    .filter(|text| !text.is_empty());

    Ok(ComputedResult {
        headline_value: summary.headline_value,
        comparison_value: summary.comparison_value,
        percent_change: summary.percent_change,
        color,
        headline_text,
        subheader_text,
    })
}

/// Compute and arrange a tile without writing it anywhere.
///
/// # Errors
/// Returns `KpiError::Geometry` for unusable container sizes and propagates
/// extraction, formatting, and measurement failures.
pub fn layout(
    payload: &RenderPayload,
    form: &FormData,
    geometry: &ContainerGeometry,
    container_id: &str,
    services: &RenderServices<'_>,
) -> Result<(ComputedResult, KpiLayout)> {
    geometry.validate()?;
    let result = compute_result(payload, form, services.formatter)?;
    let layout = compose(
        &result,
        payload,
        form,
        geometry,
        container_id,
        services.formatter,
        services.measurer,
    )?;
    Ok((result, layout))
}

/// Render the tile into `target`, replacing its previous content.
///
/// Markup is completed before the target is touched, so on error the target
/// keeps what it had.
///
/// # Errors
/// Propagates any failure from computing, laying out, or writing the tile, and
/// I/O errors from the target.
pub fn render<M>(
    target: &mut M,
    payload: &RenderPayload,
    form: &FormData,
    geometry: &ContainerGeometry,
    services: &RenderServices<'_>,
    writer: &dyn TileWriter,
) -> Result<ComputedResult>
where
    M: MountTarget + ?Sized,
{
    let (result, layout) = layout(payload, form, geometry, target.container_id(), services)?;
    let markup = writer.write(&layout, services.chart)?;

    target.clear()?;
    target.draw(&markup)?;
    tracing::debug!(
        container = target.container_id(),
        bytes = markup.len(),
        "Rendered tile"
    );
    Ok(result)
}

/// Render with the built-in services for `form.value_format` and the default
/// writer for `format`.
///
/// # Errors
/// Returns `KpiError::InvalidFormatSpec` for an unknown preset, otherwise as
/// [`render`].
pub fn render_with_presets<M>(
    target: &mut M,
    payload: &RenderPayload,
    form: &FormData,
    geometry: &ContainerGeometry,
    format: OutputFormat,
) -> Result<ComputedResult>
where
    M: MountTarget + ?Sized,
{
    let formatter = PresetFormatter::from_preset(&form.value_format)?;
    render(
        target,
        payload,
        form,
        geometry,
        &RenderServices::new(&formatter),
        format.writer().as_ref(),
    )
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
