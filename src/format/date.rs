//! The `smart_date` preset: label a timestamp by its finest non-zero unit.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

use crate::error::{KpiError, Result};

/// Preset name selecting [`smart_date`].
pub const SMART_DATE: &str = "smart_date";

/// Format an epoch-millisecond timestamp (UTC).
///
/// | finest non-zero unit        | example       |
/// |-----------------------------|---------------|
/// | millisecond                 | `.250ms`      |
/// | second                      | `:05s`        |
/// | minute                      | `03:45`       |
/// | hour                        | `03 PM`       |
/// | day (not Sunday, not 1st)   | `Tue 09`      |
/// | day (Sunday, not 1st)       | `Jan 07`      |
/// | month                       | `March`       |
/// | year                        | `2018`        |
///
/// # Errors
/// Returns `KpiError::Format` for non-finite or out-of-range timestamps.
#[allow(clippy::cast_possible_truncation)]
pub fn smart_date(timestamp_ms: f64) -> Result<String> {
    if !timestamp_ms.is_finite() {
        return Err(KpiError::format(timestamp_ms, "timestamp is not finite"));
    }
    let date = DateTime::<Utc>::from_timestamp_millis(timestamp_ms.trunc() as i64)
        .ok_or_else(|| KpiError::format(timestamp_ms, "timestamp is out of range"))?;

    let millis = date.timestamp_subsec_millis();
    let pattern = if millis != 0 {
        return Ok(format!(".{millis:03}ms"));
    } else if date.second() != 0 {
        ":%Ss"
    } else if date.minute() != 0 {
        "%I:%M"
    } else if date.hour() != 0 {
        "%I %p"
    } else if date.weekday() != Weekday::Sun && date.day() != 1 {
        "%a %d"
    } else if date.day() != 1 {
        "%b %d"
    } else if date.month() != 1 {
        "%B"
    } else {
        "%Y"
    };

    Ok(date.format(pattern).to_string())
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
