use crate::domain::ports::Storage;
use crate::utils::error::{ExportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads files relative to `base_path`. Absolute paths are used as given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read(&full_path).map_err(|source| ExportError::IoError {
            path: full_path,
            source,
        })
    }
}
