use serde::{Deserialize, Serialize};

use crate::model::ReachableEntity;

/// one row of the stations or bus stops CSV.
///
/// columns: id,name,type,lat,lon,travel_time_min,transfers,line_name
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EntityRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub lat: f64,
    pub lon: f64,
    pub travel_time_min: u32,
    pub transfers: u32,
    pub line_name: String,
}

impl EntityRow {
    pub const HEADER: [&'static str; 8] = [
        "id",
        "name",
        "type",
        "lat",
        "lon",
        "travel_time_min",
        "transfers",
        "line_name",
    ];
}

impl From<&ReachableEntity> for EntityRow {
    fn from(entity: &ReachableEntity) -> Self {
        EntityRow {
            id: entity.id.clone(),
            name: entity.name.clone(),
            entity_type: entity.entity_type.to_string(),
            lat: entity.lat,
            lon: entity.lon,
            travel_time_min: entity.travel_time,
            transfers: entity.transfers,
            line_name: entity.line_name.clone().unwrap_or_default(),
        }
    }
}
