pub mod app;
pub mod client;
pub mod config;
pub mod export;
pub mod map;
pub mod model;
pub mod util;

mod reach_error;

pub use reach_error::ReachError;
