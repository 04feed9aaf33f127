use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kpi_tile::cli::{Cli, Commands};
use kpi_tile::commands::{run_inspect, run_presets, run_render};

/// Log level implied by `-q` / `-v`. `RUST_LOG` takes precedence when set.
const fn default_level(cli: &Cli) -> &'static str {
    if cli.quiet {
        return "error";
    }
    match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kpi_tile={}", default_level(cli))));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Inspect(args) => run_inspect(args, &cli),
        Commands::Presets(args) => run_presets(args),
    };

    std::process::exit(exit_code);
}
