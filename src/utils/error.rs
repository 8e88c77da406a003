use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Timeout after {seconds}s calling Open Brewery API")]
    Timeout { seconds: u64 },

    #[error("Failed to fetch data from Open Brewery API: {message}")]
    Transport { message: String },

    #[error("Open Brewery API returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("API response is not valid JSON: {message}")]
    MalformedBody { message: String },

    #[error("Unexpected API response format: expected a JSON array, got {found}")]
    UnexpectedShape { found: &'static str },

    #[error("API returned empty dataset")]
    EmptyDataset,

    #[error("Landing storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid execution date '{value}': {reason}")]
    InvalidExecutionDate { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

/// How bad a failure is for the scheduler that invoked the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Upstream hiccup, a retry has a fair chance.
    Medium,
    /// Bad data or bad configuration; retrying the same run will fail again.
    High,
    /// The landing zone itself is unusable.
    Critical,
}

impl IngestionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Timeout { .. } | Self::Transport { .. } | Self::HttpStatus { .. } => {
                ErrorCategory::Network
            }
            Self::MalformedBody { .. }
            | Self::UnexpectedShape { .. }
            | Self::EmptyDataset
            | Self::Serialization(_) => ErrorCategory::Data,
            Self::Storage { .. } => ErrorCategory::Storage,
            Self::InvalidExecutionDate { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Whether re-running the same invocation may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Transport { .. } | Self::EmptyDataset => true,
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        if self.is_retryable() {
            return ErrorSeverity::Medium;
        }
        match self.category() {
            ErrorCategory::Storage => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit status for the CLI.
    pub fn exit_code(&self) -> i32 {
        if self.category() == ErrorCategory::Configuration {
            return 4;
        }
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => {
                "The API did not answer in time; retry later or raise the timeout"
            }
            Self::Transport { .. } => "Check network connectivity and the configured endpoint",
            Self::HttpStatus { status, .. } if *status >= 500 || *status == 429 => {
                "The API is unavailable or throttling; retry later"
            }
            Self::HttpStatus { .. } => "Check the endpoint URL and the page size parameter",
            Self::MalformedBody { .. } | Self::UnexpectedShape { .. } => {
                "The API contract may have changed; inspect the raw response"
            }
            Self::EmptyDataset => "The API returned no records; retry later",
            Self::Storage { .. } => {
                "Check that the landing base path exists, is writable and has free space"
            }
            Self::Serialization(_) => "The fetched records could not be serialized",
            Self::InvalidExecutionDate { .. } => "Pass the execution date as YYYY-MM-DD",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        let prefix = match self.category() {
            ErrorCategory::Network => "Could not reach the brewery API",
            ErrorCategory::Data => "The brewery API returned unusable data",
            ErrorCategory::Storage => "Could not write the landing file",
            ErrorCategory::Configuration => "Invalid configuration",
        };
        format!("{}: {}", prefix, self)
    }
}

pub type Result<T> = std::result::Result<T, IngestionError>;
