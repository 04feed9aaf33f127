//! SVG paint values and text anchoring.

use std::fmt;

use crate::compute::ColorToken;

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#54A05C")
    Hex(String),
    /// CSS variable reference with a fallback (e.g., "card" → "var(--color-card, #fff)")
    CssVar { name: String, fallback: String },
    /// Reference to a gradient defined in the same document.
    Gradient(String),
}

impl ChartColor {
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    #[must_use]
    pub fn css_var(name: &str, fallback: &str) -> Self {
        Self::CssVar {
            name: name.to_string(),
            fallback: fallback.to_string(),
        }
    }

    #[must_use]
    pub fn gradient(id: &str) -> Self {
        Self::Gradient(id.to_string())
    }

    /// Convert to an SVG/CSS paint string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar { name, fallback } => format!("var(--color-{name}, {fallback})"),
            Self::Gradient(id) => format!("url(#{id})"),
        }
    }

    /// White, overridable with `--color-card` for dark themes.
    #[must_use]
    pub fn card() -> Self {
        Self::css_var("card", "#fff")
    }
}

impl From<ColorToken> for ChartColor {
    fn from(token: ColorToken) -> Self {
        Self::hex(token.hex())
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
