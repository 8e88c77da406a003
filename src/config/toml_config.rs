use crate::config::IngestConfig;
use crate::utils::error::{IngestionError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every key may be omitted; missing keys keep
/// whatever the layer below provided.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub landing: LandingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LandingConfig {
    pub base_path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| IngestionError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IngestionError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LANDING_ROOT}); an unset variable is an error
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IngestionError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(IngestionError::ConfigError {
                message: format!(
                    "Unset environment variable(s) referenced in config: {}",
                    missing.join(", ")
                ),
            });
        }

        Ok(result.into_owned())
    }

    /// Overlays the keys present in this file onto `base`.
    pub fn apply(&self, mut base: IngestConfig) -> IngestConfig {
        if let Some(endpoint) = &self.source.endpoint {
            base.api_endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.source.timeout_seconds {
            base.timeout_seconds = timeout;
        }
        if let Some(page_size) = self.source.page_size {
            base.page_size = page_size;
        }
        if let Some(base_path) = &self.landing.base_path {
            base.base_path = base_path.clone();
        }
        base
    }
}
