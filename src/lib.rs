pub mod cli;
pub mod commands;
pub mod compute;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod output;
pub mod render;

pub use error::{KpiError, Result};
pub use model::{ComputedResult, ContainerGeometry, FormData, RenderPayload, VizMode};
pub use render::{RenderServices, compute_result, layout, render, render_with_presets};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RENDER_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
