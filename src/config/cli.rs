use crate::config::toml_config::TomlConfig;
use crate::config::IngestConfig;
use crate::domain::model::ExecutionDate;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "brewery-ingest")]
#[command(about = "Fetch breweries from Open Brewery DB into a dated landing partition")]
pub struct CliConfig {
    /// Logical run date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub execution_date: Option<String>,

    /// Number of records to request from the API
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Catalog endpoint to fetch from
    #[arg(long)]
    pub endpoint: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Root directory of the landing zone
    #[arg(long)]
    pub base_path: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-phase timing and memory usage")]
    pub monitor: bool,

    /// Resolve and validate configuration without fetching or writing
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file (if any), then flags given on the command line.
    pub fn resolve(&self) -> Result<IngestConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.apply(IngestConfig::default()),
            None => IngestConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.api_endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(base_path) = &self.base_path {
            config.base_path = base_path.clone();
        }

        Ok(config)
    }

    pub fn execution_date(&self) -> Result<ExecutionDate> {
        match &self.execution_date {
            Some(value) => ExecutionDate::parse(value),
            None => Ok(ExecutionDate::today()),
        }
    }
}
