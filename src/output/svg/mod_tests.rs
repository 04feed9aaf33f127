//! Tests for SVG module exports.

use super::*;
use crate::compute::ColorToken;
use crate::output::chart::{ChartPoint, ChartPrimitive, ChartSpec};

#[test]
fn exports_are_available() {
    let _: ChartColor = ChartColor::hex("#000");
    let _: TextAnchor = TextAnchor::Middle;
    let _: SvgBuilder = SvgBuilder::new(1.0, 1.0);
}

#[test]
fn sparkline_is_usable_as_trait_object() {
    let chart: &dyn ChartPrimitive = &SvgSparkline;
    let spec = ChartSpec {
        width: 50.0,
        height: 20.0,
        margin: 4.0,
        points: vec![ChartPoint {
            x: 0.0,
            y: 1.0,
            date_label: "2018".to_string(),
            value_label: "1".to_string(),
        }],
        highlight: Some(0),
        accent: ColorToken::Green,
        gradient_id: "g".to_string(),
        aria_label: String::new(),
    };

    let svg = chart.draw(&spec).unwrap();
    assert!(svg.starts_with("<svg"));
    // empty aria label leaves no title
    assert!(!svg.contains("<title>Big"));
}
