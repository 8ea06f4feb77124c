use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use super::RunSummary;
use crate::{
    config::{constants, require_api_key, ApiConfig, ReachConfig},
    model::{Origin, ReachQuery},
    ReachError,
};

/// find the stations and bus stops reachable by public transit from an
/// origin within a time budget, writing them to CSV and an interactive map.
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct ReachableTransitApp {
    /// origin latitude in WGS84 degrees
    #[arg(long, default_value_t = constants::DEFAULT_LAT, allow_negative_numbers = true)]
    pub lat: f64,
    /// origin longitude in WGS84 degrees
    #[arg(long, default_value_t = constants::DEFAULT_LON, allow_negative_numbers = true)]
    pub lon: f64,
    /// travel time budget in minutes (1-180)
    #[arg(long, default_value_t = constants::DEFAULT_TIME_LIMIT_MINUTES, allow_negative_numbers = true)]
    pub time: i64,
    /// maximum number of transfers
    #[arg(long, default_value_t = constants::DEFAULT_MAX_TRANSFERS, allow_negative_numbers = true)]
    pub transfers: i64,
    /// directory receiving stations.csv and bus_stops.csv
    #[arg(long, default_value = constants::DEFAULT_OUTPUT_DIRECTORY)]
    pub output_dir: PathBuf,
    /// path of the HTML map file
    #[arg(long, default_value = constants::DEFAULT_MAP_FILENAME)]
    pub map_file: PathBuf,
    /// number of directional samples used for the reachable polygon.
    /// overrides the value from --config.
    #[arg(long, allow_negative_numbers = true)]
    pub partition_count: Option<i64>,
    /// TOML file with API connection settings
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// also write the raw API response body to this file
    #[arg(long)]
    pub save_response: Option<PathBuf>,
}

impl ReachableTransitApp {
    /// runs the pipeline with the API key taken from the environment
    pub fn run(&self) -> Result<RunSummary, ReachError> {
        self.run_with_api_key(std::env::var(constants::API_KEY_ENV).ok())
    }

    pub fn run_with_api_key(&self, api_key: Option<String>) -> Result<RunSummary, ReachError> {
        let config = self.resolve(api_key)?;
        super::run(&config)
    }

    /// applies defaults and validates the command line, producing the
    /// settings for one run.
    pub fn resolve(&self, api_key: Option<String>) -> Result<ReachConfig, ReachError> {
        let api = match &self.config {
            Some(path) => ApiConfig::from_file(path)?,
            None => ApiConfig::default(),
        };
        let origin = Origin::new(self.lat, self.lon)?;
        let partition_count = self.partition_count.unwrap_or(api.partition_count);
        let query = ReachQuery::new(
            origin,
            self.time,
            self.transfers,
            partition_count,
            api.walk_speed,
            api.node_type.clone(),
        )?;
        let api_key = require_api_key(api_key)?;
        Ok(ReachConfig {
            query,
            api,
            api_key,
            output_directory: self.output_dir.clone(),
            map_file: self.map_file.clone(),
            save_response: self.save_response.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ReachableTransitApp;
    use crate::ReachError;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> ReachableTransitApp {
        let argv = std::iter::once("reachable_transit").chain(args.iter().copied());
        ReachableTransitApp::try_parse_from(argv).unwrap()
    }

    fn key() -> Option<String> {
        Some(String::from("test-key"))
    }

    #[test]
    fn test_defaults() {
        let app = parse(&[]);
        let config = app.resolve(key()).unwrap();
        assert_eq!(config.query.origin().lat, 35.6817137);
        assert_eq!(config.query.origin().lon, 139.7777797);
        assert_eq!(config.query.time_limit(), 30);
        assert_eq!(config.query.max_transfers(), 1);
        assert_eq!(config.query.partition_count(), 36);
        assert_eq!(config.output_directory, PathBuf::from("csv"));
        assert_eq!(config.map_file, PathBuf::from("reachable_map.html"));
        assert_eq!(config.stations_file(), PathBuf::from("csv/stations.csv"));
        assert_eq!(config.bus_stops_file(), PathBuf::from("csv/bus_stops.csv"));
        assert!(config.save_response.is_none());
    }

    #[test]
    fn test_flags() {
        let app = parse(&[
            "--lat",
            "-33.8688",
            "--lon",
            "151.2093",
            "--time",
            "45",
            "--transfers",
            "0",
            "--output-dir",
            "out",
            "--map-file",
            "out/map.html",
            "--partition-count",
            "72",
        ]);
        let config = app.resolve(key()).unwrap();
        assert_eq!(config.query.origin().lat, -33.8688);
        assert_eq!(config.query.time_limit(), 45);
        assert_eq!(config.query.max_transfers(), 0);
        assert_eq!(config.query.partition_count(), 72);
        assert_eq!(config.output_directory, PathBuf::from("out"));
        assert_eq!(config.map_file, PathBuf::from("out/map.html"));
    }

    #[test]
    fn test_invalid_latitude() {
        let app = parse(&["--lat", "95.0"]);
        assert!(matches!(
            app.resolve(key()),
            Err(ReachError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_non_positive_time() {
        let app = parse(&["--time", "-10"]);
        assert!(matches!(
            app.resolve(key()),
            Err(ReachError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_missing_key() {
        let app = parse(&[]);
        assert!(matches!(
            app.resolve(None),
            Err(ReachError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_configuration_checked_before_key() {
        let app = parse(&["--transfers", "-1"]);
        assert!(matches!(
            app.resolve(None),
            Err(ReachError::ConfigurationError(_))
        ));
    }
}
