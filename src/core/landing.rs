use crate::domain::model::{BreweryBatch, ExecutionDate};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// File name the transform engine expects inside each date partition.
pub const LANDING_FILE_NAME: &str = "list_breweries.json";

/// Persists batches as `<base>/<execution_date>/list_breweries.json`.
pub struct LandingWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> LandingWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Location of a partition file relative to the storage root.
    pub fn partition_file(execution_date: &ExecutionDate) -> String {
        format!("{}/{}", execution_date, LANDING_FILE_NAME)
    }

    /// Writes `batch` as indented UTF-8 JSON, replacing any previous snapshot
    /// for the same date, and returns the absolute path of the file.
    pub async fn write(&self, batch: &BreweryBatch, execution_date: &ExecutionDate) -> Result<PathBuf> {
        let data = serde_json::to_vec_pretty(batch)?;
        let path = self
            .storage
            .write_file(&Self::partition_file(execution_date), &data)
            .await?;

        tracing::info!("✅ Landing file written to {}", path.display());
        tracing::info!("✅ Records ingested: {}", batch.len());

        Ok(path)
    }

    pub async fn read(&self, execution_date: &ExecutionDate) -> Result<BreweryBatch> {
        let data = self
            .storage
            .read_file(&Self::partition_file(execution_date))
            .await?;
        Ok(serde_json::from_slice(&data)?)
    }
}
