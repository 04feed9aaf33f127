use super::*;
use crate::format::PRESET_SAMPLE;

#[test]
fn lists_every_preset() {
    let table = run_presets_impl(PRESET_SAMPLE).unwrap();
    assert_eq!(table.lines().count(), EXAMPLE_PRESETS.len() + 1);
    assert!(table.starts_with("PRESET"));
}

#[test]
fn formats_sample_with_each_preset() {
    let table = run_presets_impl(PRESET_SAMPLE).unwrap();
    let row = |preset: &str| {
        table
            .lines()
            .find(|line| line.split_whitespace().next() == Some(preset))
            .map(|line| line[PRESET_COLUMN..].trim().to_string())
    };

    assert_eq!(row(".3s").as_deref(), Some("12.3k"));
    assert_eq!(row("$,.2f").as_deref(), Some("$12,345.43"));
    assert_eq!(row(",d").as_deref(), Some("12,345"));
    assert_eq!(row(".2e").as_deref(), Some("1.23e+4"));
}

#[test]
fn non_finite_sample_fails() {
    assert!(run_presets_impl(f64::NAN).is_err());
}
