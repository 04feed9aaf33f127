//! d3-style number format specs: `[sign][$][,][.precision][type]`.
//!
//! Supported types: `d` (integer), `f` (fixed), `%` (percent), `s` (SI prefix),
//! `e` (exponent), `r` (significant digits), or none (trimmed significant
//! digits: the given precision, or [`DEFAULT_SIGNIFICANT`] without one).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{KpiError, Result};

static SPEC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-+ ])?(\$)?(,)?(?:\.(\d+))?([dfs%er])?$").expect("Invalid regex")
});

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Default precision when a spec names a type but no precision.
const DEFAULT_PRECISION: usize = 6;

/// Significant digits for a typeless spec without a precision.
const DEFAULT_SIGNIFICANT: usize = 12;

/// Largest precision accepted, matching d3's clamp.
const MAX_PRECISION: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SignMode {
    #[default]
    Minus,
    Plus,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FormatKind {
    #[default]
    Shortest,
    Integer,
    Fixed,
    Percent,
    SiPrefix,
    Exponent,
    Significant,
}

/// A parsed number format spec.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberFormat {
    spec: String,
    sign: SignMode,
    currency: bool,
    grouping: bool,
    precision: Option<usize>,
    kind: FormatKind,
}

impl NumberFormat {
    /// Parse a spec such as `,.2f`, `+.1%` or `.3s`.
    ///
    /// # Errors
    /// Returns `KpiError::InvalidFormatSpec` if `spec` is not recognised.
    pub fn parse(spec: &str) -> Result<Self> {
        let caps = SPEC_PATTERN
            .captures(spec)
            .ok_or_else(|| KpiError::InvalidFormatSpec(spec.to_string()))?;

        let sign = match caps.get(1).map(|m| m.as_str()) {
            Some("+") => SignMode::Plus,
            Some(" ") => SignMode::Space,
            _ => SignMode::Minus,
        };
        let precision = caps
            .get(4)
            .map(|m| {
                m.as_str()
                    .parse::<usize>()
                    .map_err(|_| KpiError::InvalidFormatSpec(spec.to_string()))
            })
            .transpose()?
            .map(|p| p.min(MAX_PRECISION));
        let kind = match caps.get(5).map(|m| m.as_str()) {
            Some("d") => FormatKind::Integer,
            Some("f") => FormatKind::Fixed,
            Some("%") => FormatKind::Percent,
            Some("s") => FormatKind::SiPrefix,
            Some("e") => FormatKind::Exponent,
            Some("r") => FormatKind::Significant,
            _ => FormatKind::Shortest,
        };

        Ok(Self {
            spec: spec.to_string(),
            sign,
            currency: caps.get(2).is_some(),
            grouping: caps.get(3).is_some(),
            precision,
            kind,
        })
    }

    /// The spec this format was parsed from.
    #[must_use]
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Format `value`.
    ///
    /// # Errors
    /// Returns `KpiError::Format` for NaN or infinite values.
    pub fn format(&self, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(KpiError::format(value, "value is not finite"));
        }

        let magnitude = value.abs();
        let (body, suffix) = self.format_magnitude(magnitude)?;
        let negative = value.is_sign_negative() && !is_zero_text(&body);

        let mut output = String::with_capacity(body.len() + 4);
        match (negative, self.sign) {
            (true, _) => output.push('-'),
            (false, SignMode::Plus) => output.push('+'),
            (false, SignMode::Space) => output.push(' '),
            (false, SignMode::Minus) => {}
        }
        if self.currency {
            output.push('$');
        }
        if self.grouping {
            output.push_str(&group_thousands(&body));
        } else {
            output.push_str(&body);
        }
        output.push_str(suffix);
        Ok(output)
    }

    fn format_magnitude(&self, magnitude: f64) -> Result<(String, &'static str)> {
        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        let formatted = match self.kind {
            FormatKind::Shortest => {
                let digits = self.precision.unwrap_or(DEFAULT_SIGNIFICANT).max(1);
                (trimmed_significant(magnitude, digits)?, "")
            }
            FormatKind::Integer => (format!("{:.0}", magnitude.round()), ""),
            FormatKind::Fixed => (format!("{magnitude:.precision$}"), ""),
            FormatKind::Percent => (format!("{:.precision$}", magnitude * 100.0), "%"),
            FormatKind::Exponent => (exponent(magnitude, precision), ""),
            FormatKind::Significant => (significant(magnitude, precision.max(1))?, ""),
            FormatKind::SiPrefix => si_prefixed(magnitude, precision.max(1))?,
        };
        Ok(formatted)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

/// `1.23e4` → `1.23e+4`.
fn exponent(magnitude: f64, precision: usize) -> String {
    let raw = format!("{magnitude:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => raw,
    }
}

/// Decimal exponent of `magnitude` after rounding to `digits` significant digits.
fn rounded_exponent(magnitude: f64, digits: usize) -> Result<i32> {
    let sci = format!("{magnitude:.prec$e}", prec = digits - 1);
    sci.split_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .ok_or_else(|| KpiError::format(magnitude, "cannot determine exponent"))
}

#[allow(clippy::cast_sign_loss)]
fn decimals_for(digits: usize, exponent: i32) -> usize {
    let digits = i32::try_from(digits).unwrap_or(i32::MAX);
    (digits - 1 - exponent).max(0) as usize
}

fn significant(magnitude: f64, digits: usize) -> Result<String> {
    if magnitude == 0.0 {
        return Ok(format!("{:.prec$}", 0.0, prec = digits - 1));
    }
    let exp = rounded_exponent(magnitude, digits)?;
    let decimals = decimals_for(digits, exp);
    if decimals > 0 {
        return Ok(format!("{magnitude:.decimals$}"));
    }
    // Round away digits left of the decimal point.
    let scale = 10f64.powi(exp + 1 - i32::try_from(digits).unwrap_or(i32::MAX));
    Ok(format!("{:.0}", (magnitude / scale).round() * scale))
}

fn trimmed_significant(magnitude: f64, digits: usize) -> Result<String> {
    let exp = if magnitude == 0.0 {
        0
    } else {
        rounded_exponent(magnitude, digits)?
    };
    let digits_i32 = i32::try_from(digits).unwrap_or(i32::MAX);
    if exp < -6 || exp >= digits_i32 {
        let raw = exponent(magnitude, digits - 1);
        return Ok(match raw.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{exp}", trim_fraction(mantissa)),
            None => raw,
        });
    }
    Ok(trim_fraction(&significant(magnitude, digits)?).to_string())
}

fn si_prefixed(magnitude: f64, digits: usize) -> Result<(String, &'static str)> {
    if magnitude == 0.0 {
        return Ok((format!("{:.prec$}", 0.0, prec = digits - 1), ""));
    }
    let exp = rounded_exponent(magnitude, digits)?;
    let group = exp.div_euclid(3).clamp(-8, 8);
    let scaled = magnitude / 10f64.powi(group * 3);
    let decimals = decimals_for(digits, exp - group * 3);
    #[allow(clippy::cast_sign_loss)]
    let prefix = SI_PREFIXES[(group + 8) as usize];
    Ok((format!("{scaled:.decimals$}"), prefix))
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn is_zero_text(body: &str) -> bool {
    body.chars()
        .take_while(|c| *c != 'e')
        .all(|c| c == '0' || c == '.')
}

/// Insert `,` every three digits in the leading integer run of `body`.
fn group_thousands(body: &str) -> String {
    let split = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    let (integer, rest) = body.split_at(split);

    let mut grouped = String::with_capacity(body.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(rest);
    grouped
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
