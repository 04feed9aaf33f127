mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    ContainerConfig, DEFAULT_CONTAINER_ID, DEFAULT_HEIGHT, DEFAULT_WIDTH, FormConfig, KpiConfig,
};
