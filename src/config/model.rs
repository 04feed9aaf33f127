use serde::{Deserialize, Serialize};

use crate::error::{KpiError, Result};
use crate::format::PresetFormatter;
use crate::model::{CONTAINER_PADDING, ContainerGeometry, FormData, VizMode};

pub const DEFAULT_CONTAINER_ID: &str = "kpi";
pub const DEFAULT_WIDTH: f64 = 400.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;

/// Root of `.kpi-tile.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KpiConfig {
    pub form: FormConfig,
    pub container: ContainerConfig,
}

/// `[form]` table: how the value is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub viz_mode: VizMode,
    /// Number format preset. Empty means the default preset.
    pub value_format: String,
    pub plan_fact: bool,
}

/// `[container]` table: where the tile is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub container_id: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: CONTAINER_PADDING,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl KpiConfig {
    #[must_use]
    pub fn form_data(&self) -> FormData {
        FormData::new(self.form.viz_mode)
            .with_value_format(self.form.value_format.clone())
            .with_plan_fact(self.form.plan_fact)
    }

    #[must_use]
    pub fn geometry(&self) -> ContainerGeometry {
        ContainerGeometry::new(self.container.width, self.container.height)
            .with_padding(self.container.padding)
    }

    /// Check the values a render would otherwise reject later.
    ///
    /// # Errors
    /// Returns `KpiError::InvalidFormatSpec` for an unknown preset and
    /// `KpiError::Config` for unusable container settings.
    pub fn validate(&self) -> Result<()> {
        PresetFormatter::from_preset(&self.form.value_format)?;
        self.geometry()
            .validate()
            .map_err(|e| KpiError::Config(format!("[container] {e}")))?;
        if self.container.container_id.trim().is_empty() {
            return Err(KpiError::Config(
                "[container] container_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
