//! Largest-font-that-fits search for single-line text.
//!
//! Sizes are searched downward from an ideal size in fixed steps, re-measuring
//! the text each time through a [`TextMeasurer`]. The search always ends: at the
//! first size that fits, or at [`MIN_FONT_SIZE`] when nothing does. Ideal sizes
//! are clamped to [`MAX_FONT_SIZE`], which bounds the number of measurements.

use std::fmt;

use serde::Serialize;

use crate::error::{KpiError, Result};

/// Decrement between measured candidate sizes, in px.
pub const FONT_SIZE_STEP: f64 = 2.0;

/// Smallest size the search returns, in px.
pub const MIN_FONT_SIZE: f64 = 1.0;

/// Largest size the search starts from, in px.
pub const MAX_FONT_SIZE: f64 = 10_000.0;

/// Font stack used for all tile text.
pub const FONT_FAMILY: &str = "-apple-system,BlinkMacSystemFont,Segoe UI,Roboto,Oxygen,Ubuntu,Cantarell,Open Sans,Helvetica Neue,sans-serif";

/// Weight indicator so callers avoid stringly-typed lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Regular,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    #[must_use]
    pub const fn css_weight(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Regular => 400,
            Self::SemiBold => 600,
            Self::Bold => 700,
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_weight())
    }
}

/// A concrete font to measure text with.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size_px: f64,
    pub weight: FontWeight,
    pub family: String,
}

impl FontSpec {
    #[must_use]
    pub fn new(size_px: f64, weight: FontWeight) -> Self {
        Self {
            size_px,
            weight,
            family: FONT_FAMILY.to_string(),
        }
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }
}

/// CSS `font` shorthand, e.g. `600 40px sans-serif`.
impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}px {}", self.weight, self.size_px, self.family)
    }
}

/// Text width oracle.
pub trait TextMeasurer {
    /// Rendered width of `text` in `font`, in px.
    ///
    /// # Errors
    /// Returns an error if the width cannot be determined.
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f64>;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &FontSpec) -> Result<f64>,
{
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f64> {
        self(text, font)
    }
}

/// Average-advance estimate: character count × size × a per-weight ratio.
///
/// Heavier weights run slightly wider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

impl HeuristicMeasurer {
    const fn width_ratio(weight: FontWeight) -> f64 {
        match weight.css_weight() {
            600.. => 0.58,
            500.. => 0.55,
            _ => 0.52,
        }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    #[allow(clippy::cast_precision_loss)]
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f64> {
        Ok(text.chars().count() as f64 * font.size_px * Self::width_ratio(font.weight))
    }
}

/// Largest size `<= ideal_size` (stepping by [`FONT_SIZE_STEP`]) at which `text`
/// fits in `available_width`, floored at [`MIN_FONT_SIZE`].
///
/// An ideal size below the floor is raised to it and one above
/// [`MAX_FONT_SIZE`] is lowered to it. Empty text is not measured
/// and keeps the (floored) ideal size.
///
/// # Errors
/// Returns `KpiError::Measurement` if the ideal size is not finite, the
/// measurer fails, or it reports a non-finite, negative, or (for non-empty
/// text) zero width.
pub fn fit_font_size<M>(
    text: &str,
    available_width: f64,
    ideal_size: f64,
    weight: FontWeight,
    measurer: &M,
) -> Result<f64>
where
    M: TextMeasurer + ?Sized,
{
    if !ideal_size.is_finite() {
        return Err(KpiError::measurement(
            text,
            format!("ideal font size {ideal_size} is not finite"),
        ));
    }

    let mut size = ideal_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    if text.is_empty() {
        return Ok(size);
    }

    loop {
        let width = checked_width(measurer, text, &FontSpec::new(size, weight))?;
        tracing::trace!(size, width, available_width, "Measured candidate font size");
        if width <= available_width {
            return Ok(size);
        }

        let next = size - FONT_SIZE_STEP;
        if next < MIN_FONT_SIZE || next >= size {
            return Ok(MIN_FONT_SIZE);
        }
        size = next;
    }
}

fn checked_width<M>(measurer: &M, text: &str, font: &FontSpec) -> Result<f64>
where
    M: TextMeasurer + ?Sized,
{
    let width = measurer.measure_width(text, font)?;
    if !width.is_finite() || width < 0.0 {
        return Err(KpiError::measurement(
            text,
            format!("measured width {width} at {font}"),
        ));
    }
    if width == 0.0 {
        return Err(KpiError::measurement(
            text,
            format!("measured zero width at {font}"),
        ));
    }
    Ok(width)
}

#[cfg(test)]
#[path = "fit_tests.rs"]
mod tests;
