//! Pure KPI computations: headline/delta extraction, color choice, and font fitting.

mod color;
mod fit;
mod trend;

pub use color::{ColorToken, choose_color};
pub use fit::{
    FONT_FAMILY, FONT_SIZE_STEP, FontSpec, FontWeight, HeuristicMeasurer, MAX_FONT_SIZE,
    MIN_FONT_SIZE, TextMeasurer, fit_font_size,
};
pub use trend::{TrendSummary, extract_trend};
