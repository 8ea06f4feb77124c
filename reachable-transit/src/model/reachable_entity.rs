use geo::Coord;
use serde::{Deserialize, Serialize};

use super::{EntityType, ReachQuery};

/// a station or bus stop reachable from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReachableEntity {
    pub id: String,
    pub name: String,
    pub entity_type: EntityType,
    pub lat: f64,
    pub lon: f64,
    /// travel time from the origin, in minutes
    pub travel_time: u32,
    pub transfers: u32,
    pub line_name: Option<String>,
}

impl ReachableEntity {
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }

    /// true when the entity respects the query's time budget and transfer limit.
    pub fn within_limits(&self, query: &ReachQuery) -> bool {
        self.travel_time <= query.time_limit() && self.transfers <= query.max_transfers()
    }
}
