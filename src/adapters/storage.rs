use crate::domain::ports::Storage;
use crate::utils::error::{IngestionError, Result};
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at the landing base path.
#[derive(Debug, Clone)]
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

fn storage_error(path: &Path) -> impl FnOnce(std::io::Error) -> IngestionError + '_ {
    move |source| IngestionError::Storage {
        path: path.to_path_buf(),
        source,
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        tokio::fs::read(&full_path)
            .await
            .map_err(storage_error(&full_path))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(storage_error(parent))?;
        }

        tokio::fs::write(&full_path, data)
            .await
            .map_err(storage_error(&full_path))?;

        std::path::absolute(&full_path).map_err(storage_error(&full_path))
    }
}
