use crate::domain::model::BreweryBatch;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    /// Writes `data` to `path` relative to the storage root, creating parent
    /// directories and replacing any existing file. Returns the absolute
    /// location of the written file.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn page_size(&self) -> u32;
    fn base_path(&self) -> &str;
}

/// Something that can hand over one page of brewery records.
#[async_trait]
pub trait BrewerySource: Send + Sync {
    async fn fetch(&self, page_size: u32) -> Result<BreweryBatch>;
}
