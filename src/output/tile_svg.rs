//! Standalone SVG rendition of the tile.

use crate::compute::FONT_FAMILY;
use crate::error::Result;

use super::TileWriter;
use super::chart::ChartPrimitive;
use super::layout::{KpiLayout, TextBand};
use super::svg::{ChartColor, SvgBuilder, Text, TextAnchor, format_coord};

/// Writes the tile as one `<svg>` of the container's size. Text bands become
/// centred `<text>` lines; the chart is nested at its band offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgTile;

impl SvgTile {
    fn text(layout: &KpiLayout, band: &TextBand) -> Text {
        Text {
            x: layout.center_x(),
            y: band.line_center(),
            content: band.text.clone(),
            font_size: band.font_size,
            font_weight: band.weight.css_weight(),
            font_family: FONT_FAMILY.to_string(),
            color: ChartColor::from(layout.accent),
            anchor: TextAnchor::Middle,
        }
    }
}

impl TileWriter for SvgTile {
    fn write(&self, layout: &KpiLayout, chart: &dyn ChartPrimitive) -> Result<String> {
        let mut builder = SvgBuilder::new(layout.width, layout.height)
            .with_fixed_size()
            .with_title(&layout.headline.text)
            .push_element(&Self::text(layout, &layout.headline));

        if let Some(band) = &layout.chart {
            let markup = chart.draw(&band.spec)?;
            builder = builder.push_raw(format!(
                "<g transform=\"translate({},{})\">\n{markup}\n</g>",
                format_coord(layout.padding),
                format_coord(band.y)
            ));
        }

        if let Some(band) = &layout.subheader {
            builder = builder.push_element(&Self::text(layout, band));
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
#[path = "tile_svg_tests.rs"]
mod tests;
