pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{http::HttpFetcher, storage::LocalStorage};
pub use config::IngestConfig;
pub use core::{ingest::IngestionJob, landing::LandingWriter};
pub use domain::model::{BreweryBatch, BreweryRecord, ExecutionDate, IngestionReport};
pub use utils::error::{IngestionError, Result};
