use crate::model::{EntityType, ReachQuery, ReachableEntity};

/// reachable entities split by type, each group in API order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedEntities {
    pub stations: Vec<ReachableEntity>,
    pub bus_stops: Vec<ReachableEntity>,
}

impl ClassifiedEntities {
    /// partitions entities into stations and bus stops. entities outside the
    /// query's time budget or transfer limit are dropped with a warning.
    pub fn classify(entities: &[ReachableEntity], query: &ReachQuery) -> ClassifiedEntities {
        let mut result = ClassifiedEntities::default();
        for entity in entities {
            if !entity.within_limits(query) {
                log::warn!(
                    "dropping '{}' ({} min, {} transfers): outside limits of {} min, {} transfers",
                    entity.name,
                    entity.travel_time,
                    entity.transfers,
                    query.time_limit(),
                    query.max_transfers()
                );
                continue;
            }
            match entity.entity_type {
                EntityType::Station => result.stations.push(entity.clone()),
                EntityType::BusStop => result.bus_stops.push(entity.clone()),
            }
        }
        result
    }

    pub fn len(&self) -> usize {
        self.stations.len() + self.bus_stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// stations followed by bus stops
    pub fn iter(&self) -> impl Iterator<Item = &ReachableEntity> {
        self.stations.iter().chain(self.bus_stops.iter())
    }
}
