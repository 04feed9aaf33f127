//! Boundary parsing of the upstream query payload.
//!
//! Upstream shape:
//! ```json
//! {
//!   "data": [[1514764800000, 10.0], [1514851200000, 15.0]],
//!   "subheader": "Active users",
//!   "compare_lag": 1,
//!   "compare_suffix": "WoW"
//! }
//! ```
//! Single-value payloads carry one-cell rows (`[[42.0]]`); each such row gets its
//! index as timestamp.

use serde::Deserialize;
use serde_json::Value;

use super::{RenderPayload, TimeSeriesPoint};
use crate::error::{KpiError, Result};

/// Payload as received, before schema validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPayload {
    #[serde(default)]
    pub data: Option<Vec<Vec<Value>>>,
    #[serde(default)]
    pub subheader: Option<String>,
    #[serde(default)]
    pub compare_lag: Option<Value>,
    #[serde(default)]
    pub compare_suffix: Option<String>,
}

impl RawPayload {
    /// Validate and convert into a `RenderPayload`.
    ///
    /// # Errors
    /// Returns `KpiError::Schema` when `data` is missing, a row is not one or two
    /// numeric cells, or `compare_lag` is not a non-negative integer.
    pub fn validate(self) -> Result<RenderPayload> {
        let rows = self
            .data
            .ok_or_else(|| KpiError::Schema("missing `data`".to_string()))?;

        let series = rows
            .iter()
            .enumerate()
            .map(|(index, row)| parse_row(index, row))
            .collect::<Result<Vec<_>>>()?;

        let compare_lag = match self.compare_lag {
            None | Some(Value::Null) => 0,
            Some(value) => parse_lag(&value)?,
        };

        Ok(RenderPayload {
            series,
            subheader: self.subheader,
            compare_lag,
            compare_suffix: self.compare_suffix,
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn parse_row(index: usize, row: &[Value]) -> Result<TimeSeriesPoint> {
    match row {
        [value] => Ok(TimeSeriesPoint::new(
            index as f64,
            numeric_cell(index, value)?,
        )),
        [timestamp, value] => Ok(TimeSeriesPoint::new(
            numeric_cell(index, timestamp)?,
            numeric_cell(index, value)?,
        )),
        _ => Err(KpiError::Schema(format!(
            "row {index} has {} cells, expected 1 or 2",
            row.len()
        ))),
    }
}

fn numeric_cell(index: usize, cell: &Value) -> Result<f64> {
    cell.as_f64()
        .ok_or_else(|| KpiError::Schema(format!("row {index} has non-numeric cell {cell}")))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_lag(value: &Value) -> Result<usize> {
    if let Some(lag) = value.as_u64() {
        return usize::try_from(lag)
            .map_err(|_| KpiError::Schema(format!("compare_lag {lag} is out of range")));
    }
    match value.as_f64() {
        Some(lag) if lag >= 0.0 && lag.fract() == 0.0 && lag <= f64::from(u32::MAX) => {
            Ok(lag as usize)
        }
        _ => Err(KpiError::Schema(format!(
            "compare_lag must be a non-negative integer, got {value}"
        ))),
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
