//! Value, date and percent formatting.
//!
//! The render path only sees the [`KpiFormatter`] trait. [`PresetFormatter`] is
//! the built-in implementation selected by a preset name.

mod date;
mod number;

pub use date::{SMART_DATE, smart_date};
pub use number::NumberFormat;

use crate::error::Result;

/// Preset used when the form leaves `value_format` empty.
pub const DEFAULT_VALUE_FORMAT: &str = ".3s";

/// Format applied to percent change in the subheader.
pub const PERCENT_FORMAT: &str = "+.1%";

/// Sample value used to preview presets.
pub const PRESET_SAMPLE: f64 = 12_345.432_1;

/// Number format presets offered by the `presets` command.
pub const EXAMPLE_PRESETS: &[&str] = &[
    DEFAULT_VALUE_FORMAT,
    ".3%",
    ".4r",
    ",.3f",
    "+,",
    "$,.2f",
    ",d",
    ".2e",
    SMART_DATE,
];

/// Formatting services injected into a render.
pub trait KpiFormatter {
    /// Format a series or headline value.
    ///
    /// # Errors
    /// Returns `KpiError::Format` if the value cannot be formatted.
    fn format_value(&self, value: f64) -> Result<String>;

    /// Format an x-axis timestamp (epoch ms).
    ///
    /// # Errors
    /// Returns `KpiError::Format` if the timestamp cannot be formatted.
    fn format_date(&self, timestamp_ms: f64) -> Result<String>;

    /// Format a percent change, where `1.0` is 100%.
    ///
    /// # Errors
    /// Returns `KpiError::Format` if the ratio cannot be formatted.
    fn format_percent(&self, ratio: f64) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ValueStyle {
    Number(NumberFormat),
    SmartDate,
}

/// Formatter built from a preset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetFormatter {
    value: ValueStyle,
    percent: NumberFormat,
}

impl PresetFormatter {
    /// Build a formatter for `preset`: empty for the default, `smart_date`, or a
    /// number format spec such as `,.2f`.
    ///
    /// # Errors
    /// Returns `KpiError::InvalidFormatSpec` for an unrecognised preset.
    pub fn from_preset(preset: &str) -> Result<Self> {
        let preset = preset.trim();
        let value = match preset {
            "" => ValueStyle::Number(NumberFormat::parse(DEFAULT_VALUE_FORMAT)?),
            SMART_DATE => ValueStyle::SmartDate,
            spec => ValueStyle::Number(NumberFormat::parse(spec)?),
        };
        Ok(Self {
            value,
            percent: NumberFormat::parse(PERCENT_FORMAT)?,
        })
    }

    /// Name of the value preset in effect.
    #[must_use]
    pub fn preset(&self) -> &str {
        match &self.value {
            ValueStyle::Number(format) => format.spec(),
            ValueStyle::SmartDate => SMART_DATE,
        }
    }
}

impl Default for PresetFormatter {
    fn default() -> Self {
        let default_value = NumberFormat::parse(DEFAULT_VALUE_FORMAT).unwrap_or_default();
        Self {
            value: ValueStyle::Number(default_value),
            percent: NumberFormat::parse(PERCENT_FORMAT).unwrap_or_default(),
        }
    }
}

impl KpiFormatter for PresetFormatter {
    fn format_value(&self, value: f64) -> Result<String> {
        match &self.value {
            ValueStyle::Number(format) => format.format(value),
            ValueStyle::SmartDate => smart_date(value),
        }
    }

    fn format_date(&self, timestamp_ms: f64) -> Result<String> {
        smart_date(timestamp_ms)
    }

    fn format_percent(&self, ratio: f64) -> Result<String> {
        self.percent.format(ratio)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
