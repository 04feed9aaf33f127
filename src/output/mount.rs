//! Mount targets: where rendered markup ends up.
//!
//! A render fully replaces whatever a target held before. Targets only see
//! finished markup, so a failed render leaves them untouched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A container the tile is drawn into.
pub trait MountTarget {
    /// Identifier of the container, used to scope ids inside the markup.
    fn container_id(&self) -> &str;

    /// Remove any previously drawn content.
    ///
    /// # Errors
    /// Returns an error if the target cannot be cleared.
    fn clear(&mut self) -> Result<()>;

    /// Append `markup` to the target.
    ///
    /// # Errors
    /// Returns an error if the target cannot be written.
    fn draw(&mut self, markup: &str) -> Result<()>;
}

/// In-memory target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryMount {
    container_id: String,
    content: String,
}

impl MemoryMount {
    #[must_use]
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            content: String::new(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}

impl MountTarget for MemoryMount {
    fn container_id(&self) -> &str {
        &self.container_id
    }

    fn clear(&mut self) -> Result<()> {
        self.content.clear();
        Ok(())
    }

    fn draw(&mut self, markup: &str) -> Result<()> {
        self.content.push_str(markup);
        Ok(())
    }
}

/// File-backed target.
///
/// Markup is staged in memory and each draw replaces the file through a sibling
/// temporary file, so the target never holds a half-written tile. Clearing only
/// drops the staged markup; the file on disk keeps its old content until the
/// next successful draw.
#[derive(Debug, Clone)]
pub struct FileMount {
    container_id: String,
    path: PathBuf,
    staged: String,
}

impl FileMount {
    #[must_use]
    pub fn new(container_id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            container_id: container_id.into(),
            path: path.into(),
            staged: String::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn replace_file(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let staging = self.staging_path();
        let written =
            fs::write(&staging, content).and_then(|()| fs::rename(&staging, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }
        Ok(())
    }
}

impl MountTarget for FileMount {
    fn container_id(&self) -> &str {
        &self.container_id
    }

    fn clear(&mut self) -> Result<()> {
        self.staged.clear();
        Ok(())
    }

    fn draw(&mut self, markup: &str) -> Result<()> {
        let mut next = String::with_capacity(self.staged.len() + markup.len());
        next.push_str(&self.staged);
        next.push_str(markup);
        self.replace_file(&next)?;
        self.staged = next;
        Ok(())
    }
}

#[cfg(test)]
#[path = "mount_tests.rs"]
mod tests;
