use serde::Serialize;

use crate::EXIT_SUCCESS;
use crate::cli::{Cli, InspectArgs};
use crate::error::Result;
use crate::format::PresetFormatter;
use crate::model::ComputedResult;
use crate::output::KpiLayout;
use crate::render::{RenderServices, layout};

use super::context::{TileContext, report_error};

/// Computed values and the geometry they were laid out with.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub preset: String,
    pub result: ComputedResult,
    pub layout: KpiLayout,
}

#[must_use]
pub fn run_inspect(args: &InspectArgs, cli: &Cli) -> i32 {
    match run_inspect_impl(args, cli) {
        Ok(json) => {
            println!("{json}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Build the inspection report as pretty JSON.
///
/// # Errors
/// Returns configuration, payload and layout errors.
pub(crate) fn run_inspect_impl(args: &InspectArgs, cli: &Cli) -> Result<String> {
    let ctx = TileContext::from_args(&args.tile, cli)?;
    let formatter = PresetFormatter::from_preset(&ctx.form.value_format)?;
    let services = RenderServices::new(&formatter);

    let (result, layout) = layout(
        &ctx.payload,
        &ctx.form,
        &ctx.geometry,
        &ctx.container_id,
        &services,
    )?;
    let report = InspectReport {
        preset: formatter.preset().to_string(),
        result,
        layout,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
