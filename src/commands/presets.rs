use std::fmt::Write as _;

use crate::EXIT_SUCCESS;
use crate::cli::PresetsArgs;
use crate::error::Result;
use crate::format::{EXAMPLE_PRESETS, KpiFormatter, PresetFormatter};

use super::context::report_error;

const PRESET_COLUMN: usize = 12;

#[must_use]
pub fn run_presets(args: &PresetsArgs) -> i32 {
    match run_presets_impl(args.sample) {
        Ok(table) => {
            print!("{table}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// One line per example preset with `sample` formatted by it.
///
/// # Errors
/// Returns a format error if `sample` cannot be formatted.
pub(crate) fn run_presets_impl(sample: f64) -> Result<String> {
    let mut table = String::new();
    let _ = writeln!(table, "{:<PRESET_COLUMN$} {sample}", "PRESET");
    for preset in EXAMPLE_PRESETS {
        let formatter = PresetFormatter::from_preset(preset)?;
        let _ = writeln!(
            table,
            "{preset:<PRESET_COLUMN$} {}",
            formatter.format_value(sample)?
        );
    }
    Ok(table)
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
