use serde::{Deserialize, Serialize};

use super::Origin;
use crate::ReachError;

/// upper bound the reachability API accepts for the `term` parameter, in minutes.
pub const MAX_TIME_LIMIT_MINUTES: i64 = 180;

/// a single reachability search. built once by the configuration resolver and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReachQuery {
    origin: Origin,
    time_limit: u32,
    max_transfers: u32,
    partition_count: u32,
    walk_speed: u32,
    node_type: String,
}

impl ReachQuery {
    pub fn new(
        origin: Origin,
        time_limit: i64,
        max_transfers: i64,
        partition_count: i64,
        walk_speed: u32,
        node_type: String,
    ) -> Result<ReachQuery, ReachError> {
        if time_limit <= 0 || MAX_TIME_LIMIT_MINUTES < time_limit {
            return Err(ReachError::ConfigurationError(format!(
                "time limit must be in range [1,{MAX_TIME_LIMIT_MINUTES}] minutes, found {time_limit}"
            )));
        }
        if max_transfers < 0 {
            return Err(ReachError::ConfigurationError(format!(
                "transfer limit must be non-negative, found {max_transfers}"
            )));
        }
        if partition_count <= 0 {
            return Err(ReachError::ConfigurationError(format!(
                "partition count must be positive, found {partition_count}"
            )));
        }
        let max_transfers = u32::try_from(max_transfers).map_err(|_| {
            ReachError::ConfigurationError(format!("transfer limit too large: {max_transfers}"))
        })?;
        let partition_count = u32::try_from(partition_count).map_err(|_| {
            ReachError::ConfigurationError(format!("partition count too large: {partition_count}"))
        })?;
        Ok(ReachQuery {
            origin,
            time_limit: time_limit as u32,
            max_transfers,
            partition_count,
            walk_speed,
            node_type,
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// time budget in minutes
    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn max_transfers(&self) -> u32 {
        self.max_transfers
    }

    pub fn partition_count(&self) -> u32 {
        self.partition_count
    }

    /// walking speed in km/h used by the API for access/egress legs
    pub fn walk_speed(&self) -> u32 {
        self.walk_speed
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }
}

impl std::fmt::Display for ReachQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "origin={} time_limit={}min max_transfers={} partition_count={}",
            self.origin, self.time_limit, self.max_transfers, self.partition_count
        )
    }
}
