use std::fmt::Write;

use crate::compute::FONT_FAMILY;
use crate::error::Result;

use super::chart::ChartPrimitive;
use super::layout::{KpiLayout, TextBand};
use super::svg::{format_coord, html_escape};
use super::TileWriter;

const DOCUMENT_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>KPI Tile</title>
    <style>
        :root { --color-card: #ffffff; }
        body { margin: 0; background: var(--color-card); }
    </style>
</head>
<body>
"#;

const DOCUMENT_FOOTER: &str = "</body>\n</html>\n";

/// Writes the tile as an HTML fragment: a flex column container holding the
/// headline `<div>`, the chart markup, and the subheader `<div>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTile {
    document: bool,
}

impl HtmlTile {
    #[must_use]
    pub const fn new() -> Self {
        Self { document: false }
    }

    /// Wrap the fragment in a minimal standalone page.
    #[must_use]
    pub const fn with_document(mut self, document: bool) -> Self {
        self.document = document;
        self
    }

    fn write_text_band(output: &mut String, band: &TextBand, class: &str, color: &str) {
        let _ = writeln!(
            output,
            r#"    <div class="{class}" style="font-size: {}px; color: {color}; font-weight: {}; line-height: 1em; padding-top: {}px; padding-bottom: {}px; text-align: center; white-space: nowrap;">{}</div>"#,
            format_coord(band.font_size),
            band.weight,
            format_coord(band.padding_top),
            format_coord(band.padding_bottom),
            html_escape(&band.text)
        );
    }
}

impl TileWriter for HtmlTile {
    fn write(&self, layout: &KpiLayout, chart: &dyn ChartPrimitive) -> Result<String> {
        let chart_markup = layout
            .chart
            .as_ref()
            .map(|band| chart.draw(&band.spec))
            .transpose()?;

        let color = layout.accent.hex();
        let mut output = String::new();
        if self.document {
            output.push_str(DOCUMENT_HEADER);
        }

        let _ = writeln!(
            output,
            r#"<div id="{}" class="kpi-tile" style="box-sizing: border-box; width: {}px; height: {}px; padding: {}px; font-family: {}; overflow: hidden; display: flex; flex-direction: column; justify-content: center;">"#,
            html_escape(&layout.container_id),
            format_coord(layout.width),
            format_coord(layout.height),
            format_coord(layout.padding),
            html_escape(FONT_FAMILY)
        );

        Self::write_text_band(&mut output, &layout.headline, "kpi-headline", color);

        if let Some(markup) = chart_markup {
            output.push_str("    <div class=\"kpi-chart\" style=\"line-height: 0;\">\n");
            for line in markup.lines() {
                let _ = writeln!(output, "        {line}");
            }
            output.push_str("    </div>\n");
        }

        if let Some(band) = &layout.subheader {
            Self::write_text_band(&mut output, band, "kpi-subheader", color);
        }

        output.push_str("</div>\n");
        if self.document {
            output.push_str(DOCUMENT_FOOTER);
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
