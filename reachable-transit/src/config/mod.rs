mod api_config;
mod reach_config;

pub mod constants;

pub use api_config::ApiConfig;
pub use reach_config::{require_api_key, ReachConfig};
