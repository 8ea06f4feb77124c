mod entity_type;
mod origin;
mod reach_query;
mod reachable_entity;
mod reachable_polygon;

pub use entity_type::EntityType;
pub use origin::Origin;
pub use reach_query::ReachQuery;
pub use reachable_entity::ReachableEntity;
pub use reachable_polygon::ReachablePolygon;
