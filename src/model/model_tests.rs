//! Tests for render input types.

use super::*;

mod geometry_tests {
    use super::*;

    #[test]
    fn default_padding_is_sixteen() {
        let geometry = ContainerGeometry::new(300.0, 200.0);
        assert!((geometry.padding - 16.0).abs() < f64::EPSILON);
        assert!((geometry.available_width() - 268.0).abs() < f64::EPSILON);
    }

    #[test]
    fn valid_geometry_passes() {
        assert!(ContainerGeometry::new(300.0, 200.0).validate().is_ok());
        assert!(
            ContainerGeometry::new(10.0, 10.0)
                .with_padding(0.0)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn zero_height_is_rejected() {
        let err = ContainerGeometry::new(300.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, KpiError::Geometry(ref m) if m.contains("height")));
    }

    #[test]
    fn nan_width_is_rejected() {
        let err = ContainerGeometry::new(f64::NAN, 100.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, KpiError::Geometry(ref m) if m.contains("width")));
    }

    #[test]
    fn negative_padding_is_rejected() {
        let err = ContainerGeometry::new(300.0, 100.0)
            .with_padding(-1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, KpiError::Geometry(ref m) if m.contains("padding")));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert!(ContainerGeometry::new(MAX_DIMENSION, MAX_DIMENSION).validate().is_ok());

        let err = ContainerGeometry::new(300.0, 1e11).validate().unwrap_err();
        assert!(matches!(err, KpiError::Geometry(ref m) if m.contains("limit")));
        assert!(
            ContainerGeometry::new(MAX_DIMENSION + 1.0, 100.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn padding_consuming_width_is_rejected() {
        let err = ContainerGeometry::new(32.0, 100.0).validate().unwrap_err();
        assert!(matches!(err, KpiError::Geometry(ref m) if m.contains("no room")));
    }
}

mod viz_mode_tests {
    use super::*;

    #[test]
    fn parses_names_and_upstream_aliases() {
        assert_eq!("plain".parse::<VizMode>().unwrap(), VizMode::Plain);
        assert_eq!("Trendline".parse::<VizMode>().unwrap(), VizMode::Trendline);
        assert_eq!("big_number".parse::<VizMode>().unwrap(), VizMode::Trendline);
        assert_eq!(
            "big_number_total".parse::<VizMode>().unwrap(),
            VizMode::Plain
        );
        assert!("heatmap".parse::<VizMode>().is_err());
    }

    #[test]
    fn only_trendline_shows_chart() {
        assert!(VizMode::Trendline.shows_trendline());
        assert!(!VizMode::Plain.shows_trendline());
    }
}

#[test]
fn payload_builders_compose() {
    let payload = RenderPayload::from_pairs(&[(0.0, 1.0), (1.0, 2.0)])
        .with_compare_lag(1)
        .with_compare_suffix("DoD")
        .with_subheader("Orders");

    assert_eq!(payload.series.len(), 2);
    assert_eq!(payload.compare_lag, 1);
    assert_eq!(payload.compare_suffix.as_deref(), Some("DoD"));
    assert_eq!(payload.subheader.as_deref(), Some("Orders"));
}

#[test]
fn form_data_builders_compose() {
    let form = FormData::new(VizMode::Plain)
        .with_value_format(",.2f")
        .with_plan_fact(true);

    assert_eq!(form.viz_mode, VizMode::Plain);
    assert_eq!(form.value_format, ",.2f");
    assert!(form.plan_fact);
}
