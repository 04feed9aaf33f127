//! Layout and markup for the tile.

mod chart;
mod html;
mod layout;
mod mount;
pub mod svg;
mod tile_svg;

pub use chart::{CHART_MARGIN, CROSSHAIR_DASH, ChartPoint, ChartPrimitive, ChartSpec};
pub use html::HtmlTile;
pub use layout::{
    CHART_HEIGHT_RATIO, ChartBand, HEADLINE_WEIGHT, KpiLayout, NUMBER_SIZE_RATIO,
    SUBHEADER_WEIGHT, TEXT_SIZE_RATIO, TextBand, compose,
};
pub use mount::{FileMount, MemoryMount, MountTarget};
pub use tile_svg::SvgTile;

use crate::error::Result;

/// Turns a composed layout into markup.
pub trait TileWriter {
    /// Write the tile, asking `chart` to paint the chart band if there is one.
    ///
    /// # Errors
    /// Propagates chart drawing errors.
    fn write(&self, layout: &KpiLayout, chart: &dyn ChartPrimitive) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Svg,
}

impl OutputFormat {
    /// Writer for this format.
    #[must_use]
    pub fn writer(self) -> Box<dyn TileWriter> {
        match self {
            Self::Html => Box::new(HtmlTile::new()),
            Self::Svg => Box::new(SvgTile),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
