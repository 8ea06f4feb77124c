use geo::{ConvexHull, Coord, LineString, MultiPoint, Point, Polygon};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{Origin, ReachableEntity};

/// boundary of the area reachable within the query's time budget.
///
/// vertices are stored as x=lon, y=lat. when the upstream API supplies the
/// boundary, vertex order is kept exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReachablePolygon {
    vertices: Vec<Coord<f64>>,
}

impl ReachablePolygon {
    pub fn new(vertices: Vec<Coord<f64>>) -> ReachablePolygon {
        ReachablePolygon { vertices }
    }

    pub fn empty() -> ReachablePolygon {
        ReachablePolygon::default()
    }

    /// builds the polygon from (lat, lon) pairs in the given order.
    pub fn from_lat_lon(pairs: &[(f64, f64)]) -> ReachablePolygon {
        let vertices = pairs
            .iter()
            .map(|(lat, lon)| Coord { x: *lon, y: *lat })
            .collect_vec();
        ReachablePolygon { vertices }
    }

    /// approximates the reachable area as the convex hull of a point set.
    /// fewer than three distinct points cannot bound an area, so the result
    /// is empty in that case.
    pub fn convex_hull_of(coords: &[Coord<f64>]) -> ReachablePolygon {
        let distinct = coords
            .iter()
            .map(|c| (c.x.to_bits(), c.y.to_bits()))
            .unique()
            .count();
        if distinct < 3 {
            return ReachablePolygon::empty();
        }
        let points = coords.iter().map(|c| Point::from(*c)).collect_vec();
        let hull: Polygon<f64> = MultiPoint::new(points).convex_hull();
        ReachablePolygon {
            vertices: hull.exterior().coords().copied().collect_vec(),
        }
    }

    /// the area around the origin spanned by the given entities, used when
    /// the API returns no boundary of its own.
    pub fn around<'a, I>(origin: &Origin, entities: I) -> ReachablePolygon
    where
        I: IntoIterator<Item = &'a ReachableEntity>,
    {
        let coords = std::iter::once(origin.coord())
            .chain(entities.into_iter().map(|e| e.coord()))
            .collect_vec();
        ReachablePolygon::convex_hull_of(&coords)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Coord<f64>] {
        &self.vertices
    }

    /// vertices as (lat, lon) pairs
    pub fn lat_lon_pairs(&self) -> Vec<(f64, f64)> {
        self.vertices.iter().map(|c| (c.y, c.x)).collect_vec()
    }

    /// the vertex ring, closed if the stored sequence is not already.
    pub fn closed_ring(&self) -> LineString<f64> {
        let mut ring = LineString::new(self.vertices.clone());
        ring.close();
        ring
    }
}
