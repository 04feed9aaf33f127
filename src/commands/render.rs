use crate::EXIT_SUCCESS;
use crate::cli::{Cli, RenderArgs};
use crate::error::Result;
use crate::format::PresetFormatter;
use crate::output::{FileMount, HtmlTile, MemoryMount, OutputFormat, SvgTile, TileWriter};
use crate::render::{RenderServices, render};

use super::context::{TileContext, report_error};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(Some(markup)) => {
            if markup.ends_with('\n') {
                print!("{markup}");
            } else {
                println!("{markup}");
            }
            EXIT_SUCCESS
        }
        Ok(None) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Render the tile. Returns the markup when it is not written to `--output`.
///
/// # Errors
/// Returns configuration, payload, render and output errors.
pub(crate) fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<Option<String>> {
    let ctx = TileContext::from_args(&args.tile, cli)?;
    let formatter = PresetFormatter::from_preset(&ctx.form.value_format)?;
    let services = RenderServices::new(&formatter);
    let writer = writer_for(args.format, args.document);

    if let Some(path) = &args.output {
        let mut target = FileMount::new(ctx.container_id.as_str(), path.as_path());
        render(
            &mut target,
            &ctx.payload,
            &ctx.form,
            &ctx.geometry,
            &services,
            writer.as_ref(),
        )?;
        tracing::info!(path = %path.display(), "Wrote tile");
        return Ok(None);
    }

    let mut target = MemoryMount::new(ctx.container_id.as_str());
    render(
        &mut target,
        &ctx.payload,
        &ctx.form,
        &ctx.geometry,
        &services,
        writer.as_ref(),
    )?;
    Ok(Some(target.into_content()))
}

fn writer_for(format: OutputFormat, document: bool) -> Box<dyn TileWriter> {
    match format {
        OutputFormat::Html => Box::new(HtmlTile::new().with_document(document)),
        OutputFormat::Svg => {
            if document {
                tracing::warn!("--document only applies to HTML output");
            }
            Box::new(SvgTile)
        }
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
