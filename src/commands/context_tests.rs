use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::model::VizMode;

fn tile_cli(args: &[&str]) -> (Cli, TileArgs) {
    let cli = Cli::parse_from(std::iter::once("kpi-tile").chain(args.iter().copied()));
    let tile = match &cli.command {
        Commands::Inspect(inspect) => inspect.tile.clone(),
        _ => panic!("Expected Inspect command"),
    };
    (cli, tile)
}

fn write_payload(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("payload.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn overrides_replace_config_values() {
    let (_, args) = tile_cli(&[
        "inspect",
        "p.json",
        "--viz-mode",
        "plain",
        "--value-format",
        ",d",
        "--plan-fact",
        "--width",
        "500",
        "--container-id",
        "revenue",
    ]);
    let mut config = KpiConfig::default();
    apply_overrides(&mut config, &args);

    assert_eq!(config.form.viz_mode, VizMode::Plain);
    assert_eq!(config.form.value_format, ",d");
    assert!(config.form.plan_fact);
    assert!((config.container.width - 500.0).abs() < f64::EPSILON);
    assert!((config.container.height - 300.0).abs() < f64::EPSILON);
    assert_eq!(config.container.container_id, "revenue");
}

#[test]
fn absent_flags_keep_config_values() {
    let (_, args) = tile_cli(&["inspect", "p.json"]);
    let mut config = KpiConfig::default();
    config.form.plan_fact = true;
    config.form.value_format = ".1f".to_string();
    apply_overrides(&mut config, &args);

    assert!(config.form.plan_fact);
    assert_eq!(config.form.value_format, ".1f");
}

#[test]
fn no_config_uses_defaults() {
    let loaded = load_config(Some(Path::new("/does/not/exist.toml")), true).unwrap();
    assert_eq!(loaded.config, KpiConfig::default());
    assert_eq!(loaded.source, None);
}

#[test]
fn explicit_missing_config_is_config_error() {
    let err = load_config(Some(Path::new("/does/not/exist.toml")), false).unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
}

#[test]
fn reads_payload_file() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, r#"{"data": [[1, 10], [2, 12]], "compare_lag": 1}"#);

    let payload = read_payload(&path).unwrap();
    assert_eq!(payload.series.len(), 2);
    assert_eq!(payload.compare_lag, 1);
}

#[test]
fn payload_errors_are_render_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, "{not json");
    let err = read_payload(&path).unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_RENDER_ERROR);

    let err = read_payload(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, KpiError::Io(_)));
    assert_eq!(exit_code_for(&err), EXIT_RENDER_ERROR);
}

#[test]
fn context_resolves_flags_and_payload() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(&dir, r#"{"data": [[42]]}"#);
    let path_arg = path.to_string_lossy().to_string();
    let (cli, args) = tile_cli(&[
        "inspect",
        &path_arg,
        "--no-config",
        "--height",
        "150",
        "--viz-mode",
        "plain",
    ]);

    let ctx = TileContext::from_args(&args, &cli).unwrap();
    assert_eq!(ctx.form.viz_mode, VizMode::Plain);
    assert!((ctx.geometry.height - 150.0).abs() < f64::EPSILON);
    assert_eq!(ctx.container_id, "kpi");
    assert!((ctx.payload.series[0].value - 42.0).abs() < f64::EPSILON);
}

#[test]
fn config_errors_win_over_payload_errors() {
    let (cli, args) = tile_cli(&[
        "inspect",
        "/no/such/payload.json",
        "--no-config",
        "--value-format",
        "bogus",
    ]);

    let err = TileContext::from_args(&args, &cli).unwrap_err();
    assert!(matches!(err, KpiError::InvalidFormatSpec(_)));
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
}
