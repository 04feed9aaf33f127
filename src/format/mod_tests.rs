use super::*;
use crate::error::KpiError;

#[test]
fn empty_preset_uses_si_default() {
    let formatter = PresetFormatter::from_preset("").unwrap();
    assert_eq!(formatter.preset(), DEFAULT_VALUE_FORMAT);
    assert_eq!(formatter.format_value(12_345.0).unwrap(), "12.3k");
}

#[test]
fn default_matches_empty_preset() {
    assert_eq!(
        PresetFormatter::default(),
        PresetFormatter::from_preset("").unwrap()
    );
}

#[test]
fn number_preset_formats_values() {
    let formatter = PresetFormatter::from_preset(",.1f").unwrap();
    assert_eq!(formatter.format_value(-3.0).unwrap(), "-3.0");
    assert_eq!(formatter.format_value(1234.56).unwrap(), "1,234.6");
}

#[test]
fn smart_date_preset_formats_values_as_dates() {
    let formatter = PresetFormatter::from_preset("smart_date").unwrap();
    assert_eq!(formatter.preset(), SMART_DATE);
    assert_eq!(formatter.format_value(1_514_764_800_000.0).unwrap(), "2018");
}

#[test]
fn percent_is_fixed_signed_one_decimal() {
    let formatter = PresetFormatter::from_preset(",d").unwrap();
    assert_eq!(formatter.format_percent(-0.2).unwrap(), "-20.0%");
    assert_eq!(formatter.format_percent(0.0).unwrap(), "+0.0%");
}

#[test]
fn dates_use_smart_date_regardless_of_preset() {
    let formatter = PresetFormatter::from_preset(",d").unwrap();
    assert_eq!(formatter.format_date(1_514_764_800_000.0).unwrap(), "2018");
}

#[test]
fn invalid_preset_is_rejected() {
    let err = PresetFormatter::from_preset("bogus").unwrap_err();
    assert!(matches!(err, KpiError::InvalidFormatSpec(_)));
}

#[test]
fn non_finite_value_is_format_error() {
    let formatter = PresetFormatter::default();
    let err = formatter.format_value(f64::NAN).unwrap_err();
    assert!(matches!(err, KpiError::Format { .. }));
}

#[test]
fn example_presets_all_parse() {
    for preset in EXAMPLE_PRESETS {
        let formatter = PresetFormatter::from_preset(preset).unwrap();
        assert!(!formatter.format_value(PRESET_SAMPLE).unwrap().is_empty());
    }
}
