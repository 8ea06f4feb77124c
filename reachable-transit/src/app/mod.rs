mod reachable_transit_app;
mod run;

pub use reachable_transit_app::ReachableTransitApp;
pub use run::{run, RunSummary};
