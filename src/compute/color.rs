//! Semantic accent color for the headline, chart, and subheader.

use std::fmt;

use serde::Serialize;

/// Plan/fact ratios are only colorized inside this open interval.
const PLAN_FACT_BAND: (f64, f64) = (0.0, 3.0);

/// Below this ratio the plan is missed.
const PLAN_FACT_MISS: f64 = 0.95;

/// At or above this ratio the plan is met.
const PLAN_FACT_MET: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Red,
    Orange,
    Gray,
}

impl ColorToken {
    /// CSS color value.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#54A05C",
            Self::Red => "#d63f2b",
            Self::Orange => "#EF914E",
            Self::Gray => "#808080",
        }
    }

    const fn from_sign(value: f64) -> Self {
        if value >= 0.0 { Self::Green } else { Self::Red }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => write!(f, "green"),
            Self::Red => write!(f, "red"),
            Self::Orange => write!(f, "orange"),
            Self::Gray => write!(f, "gray"),
        }
    }
}

/// Pick the accent color.
///
/// The base rule depends on the mode:
/// - absolute: `> 0` is green, anything else (zero included) red;
/// - plan/fact: ratios in (0, 3) map to red `< 0.95`, orange `< 1.0`, green
///   otherwise; ratios outside the band stay gray.
///
/// A computed `delta` replaces the base rule: `>= 0` green, `< 0` red.
#[must_use]
pub fn choose_color(plan_fact: bool, headline_value: f64, delta: Option<f64>) -> ColorToken {
    let base = if plan_fact {
        plan_fact_color(headline_value)
    } else if headline_value > 0.0 {
        ColorToken::Green
    } else {
        ColorToken::Red
    };

    delta.map_or(base, ColorToken::from_sign)
}

fn plan_fact_color(ratio: f64) -> ColorToken {
    let (low, high) = PLAN_FACT_BAND;
    if !(ratio > low && ratio < high) {
        return ColorToken::Gray;
    }
    if ratio < PLAN_FACT_MISS {
        ColorToken::Red
    } else if ratio < PLAN_FACT_MET {
        ColorToken::Orange
    } else {
        ColorToken::Green
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
