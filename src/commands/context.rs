use std::fs;
use std::io::{self, Read as _};
use std::path::Path;

use crate::cli::{Cli, TileArgs};
use crate::config::{ConfigLoader, FileConfigLoader, KpiConfig, LoadResult};
use crate::error::{KpiError, Result};
use crate::model::{ContainerGeometry, FormData, RenderPayload};
use crate::{EXIT_CONFIG_ERROR, EXIT_RENDER_ERROR};

const STDIN_PATH: &str = "-";

/// Load configuration, honoring `--no-config` and `--config`.
///
/// # Errors
/// Returns an error if the configuration file cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: KpiConfig::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Apply command-line overrides on top of the loaded configuration.
pub(crate) fn apply_overrides(config: &mut KpiConfig, args: &TileArgs) {
    if let Some(viz_mode) = args.viz_mode {
        config.form.viz_mode = viz_mode;
    }
    if let Some(value_format) = &args.value_format {
        config.form.value_format.clone_from(value_format);
    }
    if args.plan_fact {
        config.form.plan_fact = true;
    }
    if let Some(width) = args.width {
        config.container.width = width;
    }
    if let Some(height) = args.height {
        config.container.height = height;
    }
    if let Some(padding) = args.padding {
        config.container.padding = padding;
    }
    if let Some(container_id) = &args.container_id {
        config.container.container_id.clone_from(container_id);
    }
}

/// Read and validate a payload file, or stdin for `-`.
///
/// # Errors
/// Returns `KpiError::Io` if the input cannot be read, `KpiError::Json` for
/// malformed JSON and `KpiError::Schema` for an unexpected shape.
pub(crate) fn read_payload(path: &Path) -> Result<RenderPayload> {
    let content = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    RenderPayload::from_json(&content)
}

/// Everything a tile command needs, resolved from config, flags and payload.
#[derive(Debug, Clone)]
pub struct TileContext {
    pub payload: RenderPayload,
    pub form: FormData,
    pub geometry: ContainerGeometry,
    pub container_id: String,
}

impl TileContext {
    /// Configuration is resolved and validated before the payload is read, so
    /// configuration problems are reported first.
    ///
    /// # Errors
    /// Returns configuration errors, then payload read and schema errors.
    pub(crate) fn from_args(args: &TileArgs, cli: &Cli) -> Result<Self> {
        let loaded = load_config(args.config.as_deref(), cli.no_config)?;
        if let Some(source) = &loaded.source {
            tracing::info!(path = %source.display(), "Using config");
        }

        let mut config = loaded.config;
        apply_overrides(&mut config, args);
        config.validate()?;

        let payload = read_payload(&args.payload)?;
        tracing::debug!(points = payload.series.len(), "Read payload");

        Ok(Self {
            payload,
            form: config.form_data(),
            geometry: config.geometry(),
            container_id: config.container.container_id,
        })
    }
}

/// Exit code for a failed command.
#[must_use]
pub(crate) const fn exit_code_for(err: &KpiError) -> i32 {
    if err.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_RENDER_ERROR
    }
}

/// Print `err` to stderr and return its exit code.
pub(crate) fn report_error(err: &KpiError) -> i32 {
    tracing::debug!(kind = err.error_type(), "Command failed");
    eprintln!("Error: {err}");
    exit_code_for(err)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
