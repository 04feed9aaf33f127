//! SVG building blocks and the default trend chart.
//!
//! Documents are assembled with [`SvgBuilder`] from [`SvgElement`]s. Paint is
//! given as [`ChartColor`], which accepts CSS variables with fallbacks so a
//! host page can restyle the tile.

mod builder;
mod element;
mod format;
mod sparkline;
mod style;

pub use builder::SvgBuilder;
pub use element::{HoverColumn, Line, LinearGradient, Marker, SvgElement, Text};
pub use format::{format_coord, html_escape};
pub use sparkline::SvgSparkline;
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
