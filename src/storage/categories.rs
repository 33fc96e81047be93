use std::io;
use std::path::{Path, PathBuf};

use crate::domain::DEFAULT_CATEGORIES;

/// The category reference document on disk.
///
/// Nothing is cached: each read goes back to the file so hand edits show
/// up on the next request.
#[derive(Debug, Clone)]
pub struct CategoryFile {
    path: PathBuf,
}

impl CategoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document verbatim.
    pub async fn read(&self) -> io::Result<String> {
        tokio::fs::read_to_string(&self.path).await
    }

    /// Write the starter document unless a file is already present.
    /// Returns true when a file was written.
    pub async fn write_default_if_missing(&self) -> io::Result<bool> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        tokio::fs::write(&self.path, DEFAULT_CATEGORIES).await?;
        Ok(true)
    }
}
