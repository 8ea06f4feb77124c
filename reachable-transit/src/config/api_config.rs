use std::path::Path;

use config::Config;
use serde::{Deserialize, Serialize};

use super::constants;
use crate::ReachError;

/// connection settings for the reachability API. every field may be
/// overridden from a TOML file; missing fields keep their defaults.
///
/// ```toml
/// base_url = "https://navitime-reachable.p.rapidapi.com"
/// timeout_secs = 10
/// partition_count = 72
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// value of the `x-rapidapi-host` header
    pub host: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub partition_count: i64,
    pub walk_speed: u32,
    pub node_type: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(constants::DEFAULT_BASE_URL),
            host: String::from(constants::DEFAULT_API_HOST),
            endpoint: String::from(constants::DEFAULT_ENDPOINT),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            partition_count: constants::DEFAULT_PARTITION_COUNT,
            walk_speed: constants::DEFAULT_WALK_SPEED_KMH,
            node_type: String::from(constants::DEFAULT_NODE_TYPE),
        }
    }
}

impl ApiConfig {
    /// reads API settings from a TOML file, layered over the defaults.
    pub fn from_file(filepath: &Path) -> Result<ApiConfig, ReachError> {
        let filename = filepath.to_str().ok_or_else(|| {
            ReachError::ConfigurationError(format!("config path {filepath:?} is not valid UTF-8"))
        })?;
        let source = config::File::new(filename, config::FileFormat::Toml);
        let config = Config::builder().add_source(source).build().map_err(|e| {
            ReachError::ConfigurationError(format!("failed reading '{filename}': {e}"))
        })?;
        let api_config = config.try_deserialize::<ApiConfig>().map_err(|e| {
            ReachError::ConfigurationError(format!("failed decoding '{filename}': {e}"))
        })?;
        if api_config.timeout_secs == 0 {
            return Err(ReachError::ConfigurationError(format!(
                "'{filename}': timeout_secs must be positive"
            )));
        }
        Ok(api_config)
    }

    /// full URL of the reachability endpoint
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}
