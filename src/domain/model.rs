use crate::utils::error::{IngestionError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One brewery as delivered by the API. The payload is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreweryRecord(pub serde_json::Value);

impl BreweryRecord {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.as_object().and_then(|obj| obj.get(key))
    }
}

/// Records from a single API call, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreweryBatch {
    records: Vec<BreweryRecord>,
}

impl BreweryBatch {
    pub fn new(records: Vec<BreweryRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[BreweryRecord] {
        &self.records
    }
}

impl From<Vec<serde_json::Value>> for BreweryBatch {
    fn from(values: Vec<serde_json::Value>) -> Self {
        Self::new(values.into_iter().map(BreweryRecord).collect())
    }
}

/// Logical date of a scheduled run; names the landing partition directory.
///
/// Only strict `YYYY-MM-DD` strings parse, so the value is always safe to
/// use as a single path component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExecutionDate(NaiveDate);

impl ExecutionDate {
    pub fn parse(value: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
            IngestionError::InvalidExecutionDate {
                value: value.to_string(),
                reason: e.to_string(),
            }
        })?;

        // chrono tolerates unpadded fields; the partition name must be canonical
        if date.format(DATE_FORMAT).to_string() != value {
            return Err(IngestionError::InvalidExecutionDate {
                value: value.to_string(),
                reason: "expected zero-padded YYYY-MM-DD".to_string(),
            });
        }

        Ok(Self(date))
    }

    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ExecutionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for ExecutionDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of a successful ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct IngestionReport {
    pub execution_date: ExecutionDate,
    pub record_count: usize,
    pub landing_path: PathBuf,
}
