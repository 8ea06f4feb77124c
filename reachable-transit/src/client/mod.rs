mod reachability;
mod reachability_client;
mod response;

pub use reachability::Reachability;
pub use reachability_client::{FetchResult, ReachabilityClient};
pub use response::parse_response;
