use std::path::{Path, PathBuf};

use crate::error::{KpiError, Result};

use super::KpiConfig;

/// A loaded configuration and the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: KpiConfig,
    /// `None` when no file was found and defaults are in effect.
    pub source: Option<PathBuf>,
}

/// Source of a [`KpiConfig`].
pub trait ConfigLoader {
    /// Discover and load the configuration, or fall back to defaults.
    ///
    /// # Errors
    /// Returns an error if a discovered file is unreadable, malformed, or invalid.
    fn load(&self) -> Result<LoadResult>;

    /// Load the configuration at `path`; no discovery.
    ///
    /// # Errors
    /// Returns an error if `path` is unreadable, malformed, or invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".kpi-tile.toml";
const USER_CONFIG_NAME: &str = "config.toml";
const APP_NAME: &str = "kpi-tile";

/// Filesystem access used during discovery, replaceable in tests.
pub trait FileSystem {
    /// # Errors
    /// Returns the underlying I/O error.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Directory searched for `.kpi-tile.toml`.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform configuration directory for kpi-tile:
    /// - Windows: `%APPDATA%\kpi-tile`
    /// - macOS: `~/Library/Application Support/kpi-tile`
    /// - Linux: `~/.config/kpi-tile` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Discovers `KpiConfig` files.
///
/// Search order:
/// 1. `.kpi-tile.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. `KpiConfig::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<KpiConfig> {
        let config: KpiConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.load_from_path(&path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(LoadResult {
            config: KpiConfig::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self.fs.read_to_string(path).map_err(|e| {
            KpiError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::parse_config(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
