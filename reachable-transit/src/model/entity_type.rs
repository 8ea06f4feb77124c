use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// category of a reachable node. airports and ports are grouped with stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Station,
    BusStop,
}

impl EntityType {
    /// maps an upstream node type tag onto an entity type, if it is one we recognize.
    pub fn from_type_tag(tag: &str) -> Option<EntityType> {
        match tag.trim().to_lowercase().as_str() {
            "station" | "airport" | "port" => Some(EntityType::Station),
            "bus_stop" | "busstop" | "bus" => Some(EntityType::BusStop),
            _ => None,
        }
    }

    /// fallback when a node carries no type tag: bus stops are named as such.
    pub fn from_name(name: &str) -> EntityType {
        if name.contains("バス") || name.to_uppercase().contains("BUS") {
            EntityType::BusStop
        } else {
            EntityType::Station
        }
    }

    pub fn classify(tag: Option<&str>, name: &str) -> EntityType {
        match tag.and_then(EntityType::from_type_tag) {
            Some(entity_type) => entity_type,
            None => {
                if let Some(unknown) = tag {
                    log::debug!("unrecognized node type '{unknown}' for '{name}', classifying by name");
                }
                EntityType::from_name(name)
            }
        }
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Station => write!(f, "station"),
            EntityType::BusStop => write!(f, "bus_stop"),
        }
    }
}
