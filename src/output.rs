//! Numbered image files in one output directory.
//!
//! File names are derived from the capture counter (`image_<n>.jpg`), so
//! naming is deterministic: a later run over the same directory silently
//! overwrites the previous files.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from preparing the output directory.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The on-disk layout of a capture run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Creates a layout rooted at `root`.
    ///
    /// Nothing touches the filesystem until
    /// [`ensure_exists`](Self::ensure_exists).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the output directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path for capture number `index`.
    pub fn image_path(&self, index: u32) -> PathBuf {
        self.root.join(format!("image_{}.jpg", index))
    }

    /// Creates the output directory if absent, intermediates included.
    pub fn ensure_exists(&self) -> Result<(), OutputError> {
        fs::create_dir_all(&self.root).map_err(|source| OutputError::CreateDir {
            path: self.root.clone(),
            source,
        })
    }
}
