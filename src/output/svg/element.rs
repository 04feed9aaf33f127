//! Primitive SVG elements: paths, markers, crosshair columns, gradients, text.

use std::fmt::Write;

use super::format::{format_coord, html_escape};
use super::style::{ChartColor, TextAnchor};

const MARKER_RADIUS: f64 = 4.0;

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A polyline through `points`, optionally filled down to a baseline.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    /// Paint and baseline y of the area under the line.
    /// In SVG coordinates, higher values are lower on screen.
    pub area: Option<(ChartColor, f64)>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
            area: None,
        }
    }

    /// Fill the area between the line and `baseline_y`.
    #[must_use]
    pub fn with_area(mut self, paint: ChartColor, baseline_y: f64) -> Self {
        self.area = Some((paint, baseline_y));
        self
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    fn path(&self) -> String {
        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            let command = if i == 0 { "M" } else { " L" };
            let _ = write!(path, "{command}{},{}", format_coord(*x), format_coord(*y));
        }
        path
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return String::new();
        };

        let color = self.color.to_css();
        let path = self.path();
        let mut output = String::new();

        // A single point has no area to fill
        if let Some((paint, baseline_y)) = &self.area
            && self.points.len() >= 2
        {
            let baseline = format_coord(*baseline_y);
            let _ = writeln!(
                output,
                r#"<path d="{path} L{},{baseline} L{},{baseline} Z" fill="{}" stroke="none"/>"#,
                format_coord(last.0),
                format_coord(first.0),
                paint.to_css()
            );
        }

        let _ = writeln!(
            output,
            r#"<path d="{path}" fill="none" stroke="{color}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            format_coord(self.stroke_width)
        );

        output
    }
}

/// A filled circle marking one observation.
#[derive(Debug, Clone)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: ChartColor,
    pub stroke: ChartColor,
    pub title: Option<String>,
}

impl Marker {
    #[must_use]
    pub fn new(x: f64, y: f64, fill: ChartColor) -> Self {
        Self {
            x,
            y,
            radius: MARKER_RADIUS,
            fill,
            stroke: ChartColor::card(),
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl SvgElement for Marker {
    fn render(&self) -> String {
        let attrs = format!(
            r#"cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="2""#,
            format_coord(self.x),
            format_coord(self.y),
            format_coord(self.radius),
            self.fill.to_css(),
            self.stroke.to_css()
        );
        match &self.title {
            Some(title) => format!(
                "<circle {attrs}>\n    <title>{}</title>\n</circle>",
                html_escape(title)
            ),
            None => format!("<circle {attrs}/>"),
        }
    }
}

/// Hover target for one observation: a transparent full-height column that
/// reveals a dashed vertical crosshair and a marker, with a tooltip.
#[derive(Debug, Clone)]
pub struct HoverColumn {
    /// Left edge and width of the hit area.
    pub left: f64,
    pub width: f64,
    pub height: f64,
    /// Crosshair position.
    pub x: f64,
    pub y: f64,
    pub color: ChartColor,
    pub dash: String,
    pub tooltip: Vec<String>,
}

impl SvgElement for HoverColumn {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let x = format_coord(self.x);
        let height = format_coord(self.height);
        let tooltip = self
            .tooltip
            .iter()
            .map(|line| html_escape(line))
            .collect::<Vec<_>>()
            .join("&#10;");

        let mut output = String::new();
        output.push_str("<g class=\"kpi-hover\">\n");
        let _ = writeln!(
            output,
            r#"    <rect x="{}" y="0" width="{}" height="{height}" fill="transparent"/>"#,
            format_coord(self.left),
            format_coord(self.width)
        );
        let _ = writeln!(
            output,
            r#"    <line class="kpi-crosshair" x1="{x}" y1="0" x2="{x}" y2="{height}" stroke="{color}" stroke-width="1" stroke-dasharray="{}"/>"#,
            self.dash
        );
        let _ = writeln!(
            output,
            r#"    <circle class="kpi-crosshair" cx="{x}" cy="{}" r="{}" fill="{color}" stroke="{}" stroke-width="2"/>"#,
            format_coord(self.y),
            format_coord(MARKER_RADIUS),
            ChartColor::card().to_css()
        );
        let _ = writeln!(output, "    <title>{tooltip}</title>");
        output.push_str("</g>");
        output
    }
}

/// Vertical gradient from `from` at the top to `to` at the bottom.
#[derive(Debug, Clone)]
pub struct LinearGradient {
    pub id: String,
    pub from: ChartColor,
    pub to: ChartColor,
}

impl SvgElement for LinearGradient {
    fn render(&self) -> String {
        format!(
            r#"<defs>
    <linearGradient id="{}" x1="0" y1="0" x2="0" y2="1">
        <stop offset="0%" stop-color="{}"/>
        <stop offset="100%" stop-color="{}"/>
    </linearGradient>
</defs>"#,
            html_escape(&self.id),
            self.from.to_css(),
            self.to.to_css()
        )
    }
}

/// A single line of text.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    /// Vertical centre of the line box.
    pub y: f64,
    pub content: String,
    pub font_size: f64,
    pub font_weight: u16,
    pub font_family: String,
    pub color: ChartColor,
    pub anchor: TextAnchor,
}

impl SvgElement for Text {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="central" fill="{}" font-size="{}" font-weight="{}" font-family="{}">{}</text>"#,
            format_coord(self.x),
            format_coord(self.y),
            self.anchor,
            self.color.to_css(),
            format_coord(self.font_size),
            self.font_weight,
            html_escape(&self.font_family),
            html_escape(&self.content)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
