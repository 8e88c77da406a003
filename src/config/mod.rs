#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.openbrewerydb.org/v1/breweries";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_BASE_PATH: &str = "/opt/airflow/data/landing/breweries";

const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Resolved settings for one ingestion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    pub api_endpoint: String,
    pub timeout_seconds: u64,
    pub page_size: u32,
    pub base_path: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            page_size: DEFAULT_PAGE_SIZE,
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl ConfigProvider for IngestConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl Validate for IngestConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.api_endpoint)?;
        validate_range("source.timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        validate_positive_number("source.page_size", u64::from(self.page_size), 1)?;
        validate_path("landing.base_path", &self.base_path)?;
        Ok(())
    }
}
