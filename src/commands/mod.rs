pub mod context;
pub mod inspect;
pub mod presets;
pub mod render;

pub use context::TileContext;
pub use inspect::{InspectReport, run_inspect};
pub use presets::run_presets;
pub use render::run_render;
