use crate::model::{ReachablePolygon, ReachableEntity};

/// everything recovered from one reachability response
#[derive(Debug, Clone, PartialEq)]
pub struct Reachability {
    /// entities in the order the API listed them
    pub entities: Vec<ReachableEntity>,
    /// the boundary, when the API supplied one
    pub polygon: Option<ReachablePolygon>,
}
