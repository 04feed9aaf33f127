//! Tests for font fitting.

use std::cell::Cell;

use super::*;

/// One px of width per character per px of font size.
fn linear(text: &str, font: &FontSpec) -> Result<f64> {
    Ok(text.chars().count() as f64 * font.size_px)
}

#[test]
fn text_that_fits_keeps_ideal_size() {
    let size = fit_font_size("12", 100.0, 40.0, FontWeight::SemiBold, &linear).unwrap();
    assert!((size - 40.0).abs() < f64::EPSILON);
}

#[test]
fn overflowing_text_steps_down_by_two() {
    // 5 chars: needs size <= 20 for width 100
    let size = fit_font_size("12345", 100.0, 31.0, FontWeight::SemiBold, &linear).unwrap();
    assert!((size - 19.0).abs() < f64::EPSILON);
}

#[test]
fn unfittable_text_stops_at_floor() {
    let calls = Cell::new(0_u32);
    let always_wide = |_text: &str, _font: &FontSpec| -> Result<f64> {
        calls.set(calls.get() + 1);
        Ok(10_000.0)
    };

    let size = fit_font_size("wide", 50.0, 40.0, FontWeight::SemiBold, &always_wide).unwrap();

    assert!((size - MIN_FONT_SIZE).abs() < f64::EPSILON);
    // 40, 38, ..., 2 measured, then the floor is returned
    assert_eq!(calls.get(), 20);
}

#[test]
fn ideal_below_floor_is_raised() {
    let size = fit_font_size("1", 100.0, 0.2, FontWeight::Regular, &linear).unwrap();
    assert!((size - MIN_FONT_SIZE).abs() < f64::EPSILON);
}

#[test]
fn huge_ideal_size_is_clamped() {
    let calls = Cell::new(0_u32);
    let counting = |text: &str, font: &FontSpec| -> Result<f64> {
        calls.set(calls.get() + 1);
        linear(text, font)
    };

    let size = fit_font_size("x", 10.0, 3.4e7, FontWeight::SemiBold, &counting).unwrap();

    assert!((size - 10.0).abs() < f64::EPSILON);
    // 10_000, 9_998, ..., 10
    assert_eq!(calls.get(), 4996);

    let roomy = fit_font_size("x", 1e9, 3.4e7, FontWeight::SemiBold, &linear).unwrap();
    assert!((roomy - MAX_FONT_SIZE).abs() < f64::EPSILON);
}

#[test]
fn empty_text_is_not_measured() {
    let failing = |_text: &str, _font: &FontSpec| -> Result<f64> {
        Err(KpiError::measurement("", "should not be called"))
    };
    let size = fit_font_size("", 10.0, 24.0, FontWeight::Light, &failing).unwrap();
    assert!((size - 24.0).abs() < f64::EPSILON);
}

#[test]
fn fitting_is_idempotent() {
    let measurer = HeuristicMeasurer;
    let a = fit_font_size("1,234,567", 120.0, 80.0, FontWeight::SemiBold, &measurer).unwrap();
    let b = fit_font_size("1,234,567", 120.0, 80.0, FontWeight::SemiBold, &measurer).unwrap();
    assert!((a - b).abs() < f64::EPSILON);
}

#[test]
fn longer_text_never_gets_larger_font() {
    let measurer = HeuristicMeasurer;
    let mut text = String::new();
    let mut previous = f64::INFINITY;
    for _ in 0..400 {
        text.push('8');
        let size = fit_font_size(&text, 150.0, 90.0, FontWeight::SemiBold, &measurer).unwrap();
        assert!(size <= previous, "{text}: {size} > {previous}");
        previous = size;
    }
    assert!((previous - MIN_FONT_SIZE).abs() < f64::EPSILON);
}

#[test]
fn measurer_error_propagates() {
    let failing = |text: &str, _font: &FontSpec| -> Result<f64> {
        Err(KpiError::measurement(text, "backend unavailable"))
    };
    let err = fit_font_size("42", 10.0, 24.0, FontWeight::SemiBold, &failing).unwrap_err();
    assert!(matches!(err, KpiError::Measurement { .. }));
}

#[test]
fn negative_width_is_measurement_error() {
    let negative = |_text: &str, _font: &FontSpec| -> Result<f64> { Ok(-1.0) };
    let err = fit_font_size("42", 10.0, 24.0, FontWeight::SemiBold, &negative).unwrap_err();
    assert!(matches!(err, KpiError::Measurement { .. }));
}

#[test]
fn zero_width_is_measurement_error() {
    let zero = |_text: &str, _font: &FontSpec| -> Result<f64> { Ok(0.0) };
    let err = fit_font_size("42", 10.0, 24.0, FontWeight::SemiBold, &zero).unwrap_err();
    assert!(matches!(err, KpiError::Measurement { .. }));
}

#[test]
fn nan_width_is_measurement_error() {
    let nan = |_text: &str, _font: &FontSpec| -> Result<f64> { Ok(f64::NAN) };
    let err = fit_font_size("42", 10.0, 24.0, FontWeight::SemiBold, &nan).unwrap_err();
    assert!(matches!(err, KpiError::Measurement { .. }));
}

#[test]
fn infinite_ideal_size_is_rejected() {
    let err = fit_font_size("42", 10.0, f64::INFINITY, FontWeight::SemiBold, &linear)
        .unwrap_err();
    assert!(matches!(err, KpiError::Measurement { .. }));
}

#[test]
fn works_through_trait_object() {
    let measurer: &dyn TextMeasurer = &HeuristicMeasurer;
    let size = fit_font_size("99", 1000.0, 30.0, FontWeight::Light, measurer).unwrap();
    assert!((size - 30.0).abs() < f64::EPSILON);
}

mod heuristic_tests {
    use super::*;

    #[test]
    fn heavier_weights_measure_wider() {
        let m = HeuristicMeasurer;
        let light = m
            .measure_width("1000", &FontSpec::new(20.0, FontWeight::Light))
            .unwrap();
        let semibold = m
            .measure_width("1000", &FontSpec::new(20.0, FontWeight::SemiBold))
            .unwrap();
        assert!(semibold > light);
        assert!((light - 4.0 * 20.0 * 0.52).abs() < 1e-9);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let m = HeuristicMeasurer;
        let font = FontSpec::new(10.0, FontWeight::Regular);
        let ascii = m.measure_width("ab", &font).unwrap();
        let unicode = m.measure_width("µ€", &font).unwrap();
        assert!((ascii - unicode).abs() < f64::EPSILON);
    }
}

#[test]
fn font_spec_renders_css_shorthand() {
    let font = FontSpec::new(40.0, FontWeight::SemiBold).with_family("sans-serif");
    assert_eq!(font.to_string(), "600 40px sans-serif");
}
