use crate::domain::model::BreweryBatch;
use crate::domain::ports::{BrewerySource, ConfigProvider};
use crate::utils::error::{IngestionError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Fetches one page of breweries from the catalog endpoint.
///
/// Exactly one request is made per [`BrewerySource::fetch`] call. Retrying is
/// left to whoever schedules the run.
pub struct HttpFetcher {
    client: Client,
    endpoint: String,
    timeout_seconds: u64,
}

impl HttpFetcher {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let timeout_seconds = config.timeout_seconds();
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| IngestionError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint().to_string(),
            timeout_seconds,
        })
    }

    fn classify(&self, err: reqwest::Error) -> IngestionError {
        if err.is_timeout() {
            IngestionError::Timeout {
                seconds: self.timeout_seconds,
            }
        } else {
            IngestionError::Transport {
                message: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl BrewerySource for HttpFetcher {
    async fn fetch(&self, page_size: u32) -> Result<BreweryBatch> {
        tracing::debug!("Making API request to: {} (per_page={})", self.endpoint, page_size);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("per_page", page_size)])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(IngestionError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let batch = parse_batch(&body)?;

        tracing::info!("✅ API returned {} records", batch.len());
        Ok(batch)
    }
}

/// Decodes a response body into a non-empty batch.
pub fn parse_batch(body: &[u8]) -> Result<BreweryBatch> {
    let value: Value = serde_json::from_slice(body).map_err(|e| IngestionError::MalformedBody {
        message: e.to_string(),
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(IngestionError::UnexpectedShape {
                found: json_type_name(&other),
            })
        }
    };

    if items.is_empty() {
        return Err(IngestionError::EmptyDataset);
    }

    Ok(BreweryBatch::from(items))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
