use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::format::PRESET_SAMPLE;
use crate::model::VizMode;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "kpi-tile")]
#[command(author, version, about = "Render big-number KPI tiles sized to their container")]
#[command(long_about = "Renders a single KPI value as a tile: a headline number fitted to \
    the container width, an optional trend sparkline, and a comparison subtitle.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Render or data error\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a tile from a JSON payload
    Render(RenderArgs),

    /// Print computed values and layout geometry as JSON
    Inspect(InspectArgs),

    /// List example number-format presets
    Presets(PresetsArgs),
}

/// Inputs shared by every command that renders a tile.
#[derive(Args, Debug, Clone)]
pub struct TileArgs {
    /// Payload JSON file ("-" reads stdin)
    pub payload: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display mode: trendline or plain (overrides config)
    #[arg(long)]
    pub viz_mode: Option<VizMode>,

    /// Number format preset, e.g. ",.1f" or "smart_date" (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    pub value_format: Option<String>,

    /// Treat the value as an actual/plan ratio
    #[arg(long)]
    pub plan_fact: bool,

    /// Container width in px (overrides config)
    #[arg(long)]
    pub width: Option<f64>,

    /// Container height in px (overrides config)
    #[arg(long)]
    pub height: Option<f64>,

    /// Container padding in px (overrides config)
    #[arg(long)]
    pub padding: Option<f64>,

    /// Container id, also scopes the gradient id (overrides config)
    #[arg(long)]
    pub container_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub tile: TileArgs,

    /// Output format [possible values: html, svg]
    #[arg(short, long, default_value = "html")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Wrap HTML output in a standalone document
    #[arg(long)]
    pub document: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub tile: TileArgs,
}

#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Value to format with each preset
    #[arg(long, default_value_t = PRESET_SAMPLE, allow_hyphen_values = true)]
    pub sample: f64,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
