mod reachable_map;
mod time_gradient;

pub use reachable_map::ReachableMap;
pub use time_gradient::TimeGradient;
