use std::path::PathBuf;

use super::{constants, ApiConfig};
use crate::{model::ReachQuery, ReachError};

/// fully resolved settings for one run of the pipeline.
#[derive(Debug, Clone)]
pub struct ReachConfig {
    pub query: ReachQuery,
    pub api: ApiConfig,
    pub api_key: String,
    pub output_directory: PathBuf,
    pub map_file: PathBuf,
    pub save_response: Option<PathBuf>,
}

impl ReachConfig {
    pub fn stations_file(&self) -> PathBuf {
        self.output_directory.join(constants::STATIONS_FILENAME)
    }

    pub fn bus_stops_file(&self) -> PathBuf {
        self.output_directory.join(constants::BUS_STOPS_FILENAME)
    }
}

/// validates the API key read from the environment. absent or blank keys
/// are rejected so that no request is ever sent without credentials.
pub fn require_api_key(api_key: Option<String>) -> Result<String, ReachError> {
    match api_key {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ReachError::AuthenticationError(format!(
            "environment variable {} is not set, run `export {}='your_api_key'`",
            constants::API_KEY_ENV,
            constants::API_KEY_ENV
        ))),
    }
}
