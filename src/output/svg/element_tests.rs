//! Tests for primitive SVG elements.

use super::*;

mod line_tests {
    use super::*;

    #[test]
    fn draws_path_through_points() {
        let line = Line::new(
            vec![(4.0, 20.0), (50.0, 10.5), (96.0, 4.0)],
            ChartColor::hex("#54A05C"),
        );

        let svg = line.render();
        assert!(svg.contains(r#"d="M4,20 L50,10.5 L96,4""#));
        assert!(svg.contains(r##"stroke="#54A05C""##));
        assert!(svg.contains(r#"fill="none""#));
    }

    #[test]
    fn area_closes_to_baseline() {
        let line = Line::new(vec![(4.0, 20.0), (96.0, 4.0)], ChartColor::hex("#000"))
            .with_area(ChartColor::gradient("big_number_kpi"), 56.0);

        let svg = line.render();
        assert!(svg.contains(r#"d="M4,20 L96,4 L96,56 L4,56 Z""#));
        assert!(svg.contains(r#"fill="url(#big_number_kpi)""#));
    }

    #[test]
    fn single_point_skips_area() {
        let line = Line::new(vec![(4.0, 20.0)], ChartColor::hex("#000"))
            .with_area(ChartColor::gradient("g"), 56.0);

        let svg = line.render();
        assert!(!svg.contains("url(#g)"));
        assert!(svg.contains(r#"d="M4,20""#));
    }

    #[test]
    fn empty_line_renders_nothing() {
        let line = Line::new(Vec::new(), ChartColor::hex("#000"));
        assert!(line.render().is_empty());
    }

    #[test]
    fn custom_stroke_width() {
        let line = Line::new(vec![(0.0, 0.0)], ChartColor::hex("#000")).with_stroke_width(1.5);
        assert!(line.render().contains(r#"stroke-width="1.5""#));
    }
}

mod marker_tests {
    use super::*;

    #[test]
    fn renders_with_white_stroke() {
        let svg = Marker::new(10.0, 20.0, ChartColor::hex("#d63f2b")).render();
        assert!(svg.starts_with("<circle"));
        assert!(svg.contains(r#"cx="10" cy="20" r="4""#));
        assert!(svg.contains(r##"fill="#d63f2b""##));
        assert!(svg.contains("var(--color-card, #fff)"));
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn title_is_escaped() {
        let svg = Marker::new(0.0, 0.0, ChartColor::hex("#000"))
            .with_title("<latest>")
            .render();
        assert!(svg.contains("<title>&lt;latest&gt;</title>"));
        assert!(svg.ends_with("</circle>"));
    }
}

mod hover_column_tests {
    use super::*;

    fn column() -> HoverColumn {
        HoverColumn {
            left: 0.0,
            width: 20.0,
            height: 60.0,
            x: 10.0,
            y: 30.0,
            color: ChartColor::hex("#54A05C"),
            dash: "5,2".to_string(),
            tooltip: vec!["Tue 09".to_string(), "12.0".to_string()],
        }
    }

    #[test]
    fn crosshair_is_full_height_and_dashed() {
        let svg = column().render();
        assert!(svg.contains(r#"x1="10" y1="0" x2="10" y2="60""#));
        assert!(svg.contains(r#"stroke-dasharray="5,2""#));
    }

    #[test]
    fn hit_area_is_transparent() {
        let svg = column().render();
        assert!(svg.contains(r#"<rect x="0" y="0" width="20" height="60" fill="transparent"/>"#));
    }

    #[test]
    fn tooltip_stacks_date_over_value() {
        let svg = column().render();
        assert!(svg.contains("<title>Tue 09&#10;12.0</title>"));
    }
}

#[test]
fn gradient_runs_top_to_bottom() {
    let gradient = LinearGradient {
        id: "big_number_kpi".to_string(),
        from: ChartColor::hex("#54A05C"),
        to: ChartColor::hex("#fff"),
    };

    let svg = gradient.render();
    assert!(svg.contains(r#"<linearGradient id="big_number_kpi" x1="0" y1="0" x2="0" y2="1">"#));
    assert!(svg.contains(r##"<stop offset="0%" stop-color="#54A05C"/>"##));
    assert!(svg.contains(r##"<stop offset="100%" stop-color="#fff"/>"##));
}

#[test]
fn text_escapes_content() {
    let text = Text {
        x: 200.0,
        y: 100.0,
        content: "R&D".to_string(),
        font_size: 40.0,
        font_weight: 600,
        font_family: "sans-serif".to_string(),
        color: ChartColor::hex("#000"),
        anchor: TextAnchor::Middle,
    };

    let svg = text.render();
    assert!(svg.contains(">R&amp;D</text>"));
    assert!(svg.contains(r#"text-anchor="middle" dominant-baseline="central""#));
    assert!(svg.contains(r#"font-weight="600""#));
}
