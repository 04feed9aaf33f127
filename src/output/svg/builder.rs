//! SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{format_coord, html_escape};

/// Builder for an `<svg>` document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    fixed_size: bool,
    title: String,
    style: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fixed_size: false,
            title: String::new(),
            style: String::new(),
            elements: Vec::new(),
        }
    }

    /// Emit `width`/`height` attributes so the document renders at exactly its
    /// viewBox size instead of scaling to its container.
    #[must_use]
    pub const fn with_fixed_size(mut self) -> Self {
        self.fixed_size = true;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Embedded stylesheet.
    #[must_use]
    pub fn with_style(mut self, css: impl Into<String>) -> Self {
        self.style = css.into();
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();
        let width = format_coord(self.width);
        let height = format_coord(self.height);

        let size = if self.fixed_size {
            format!(r#" width="{width}" height="{height}""#)
        } else {
            String::new()
        };
        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {width} {height}"{size} xmlns="http://www.w3.org/2000/svg" role="img">"#
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        if !self.style.is_empty() {
            let _ = writeln!(output, r"    <style>{}</style>", self.style);
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
