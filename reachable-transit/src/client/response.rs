use itertools::Itertools;
use serde::Deserialize;

use super::Reachability;
use crate::{
    model::{EntityType, ReachablePolygon, ReachableEntity},
    ReachError,
};

/// body of a reachable_transit response.
///
/// `items` and, per item, `name`, `coord` and `time` are required. everything
/// else is optional and defaulted.
#[derive(Debug, Deserialize)]
struct ReachableResponse {
    count: Option<usize>,
    items: Vec<ReachableItem>,
    unit: Option<ResponseUnit>,
    polygon: Option<Vec<ResponseCoord>>,
}

#[derive(Debug, Deserialize)]
struct ReachableItem {
    #[serde(default)]
    node_id: Option<String>,
    name: String,
    #[serde(default, alias = "node_type")]
    r#type: Option<String>,
    coord: ResponseCoord,
    time: u32,
    #[serde(default, alias = "transfers")]
    transit_count: Option<u32>,
    #[serde(default)]
    line_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
struct ResponseCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct ResponseUnit {
    datum: Option<String>,
    coord_unit: Option<String>,
}

/// decodes a reachability response body. a `polygon` array is kept in the
/// order received; without one the polygon is left for the caller to derive.
pub fn parse_response(body: &str) -> Result<Reachability, ReachError> {
    let response: ReachableResponse =
        serde_json::from_str(body).map_err(|e| ReachError::ParseError(e.to_string()))?;

    if let Some(unit) = &response.unit {
        log::debug!(
            "response unit: datum={:?} coord_unit={:?}",
            unit.datum,
            unit.coord_unit
        );
    }
    if let Some(count) = response.count {
        if count != response.items.len() {
            log::warn!(
                "response count {count} does not match number of items {}",
                response.items.len()
            );
        }
    }

    let entities = response
        .items
        .into_iter()
        .map(|item| {
            let entity_type = EntityType::classify(item.r#type.as_deref(), &item.name);
            ReachableEntity {
                id: item.node_id.unwrap_or_default(),
                name: item.name,
                entity_type,
                lat: item.coord.lat,
                lon: item.coord.lon,
                travel_time: item.time,
                transfers: item.transit_count.unwrap_or_default(),
                line_name: item.line_name.filter(|l| !l.is_empty()),
            }
        })
        .collect_vec();

    let polygon = response.polygon.map(|vertices| {
        let pairs = vertices.iter().map(|c| (c.lat, c.lon)).collect_vec();
        ReachablePolygon::from_lat_lon(&pairs)
    });

    Ok(Reachability { entities, polygon })
}

#[cfg(test)]
mod tests {
    use super::parse_response;
    use crate::{model::EntityType, ReachError};

    #[test]
    fn test_parse_items_in_order() {
        let body = serde_json::json!({
            "count": 3,
            "items": [
                { "node_id": "00001", "name": "Kayabacho", "type": "station",
                  "coord": { "lat": 35.6817, "lon": 139.7778 }, "time": 0, "transit_count": 0 },
                { "node_id": "00002", "name": "X-mae", "type": "bus_stop",
                  "coord": { "lat": 35.6799, "lon": 139.7785 }, "time": 12, "transit_count": 1,
                  "line_name": "To 22" },
                { "name": "Nihombashi",
                  "coord": { "lat": 35.6827, "lon": 139.7745 }, "time": 5 }
            ],
            "unit": { "datum": "wgs84", "coord_unit": "degree" }
        })
        .to_string();
        let result = parse_response(&body).unwrap();
        let names: Vec<&str> = result.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Kayabacho", "X-mae", "Nihombashi"]);
        assert_eq!(result.entities[1].entity_type, EntityType::BusStop);
        assert_eq!(result.entities[1].line_name.as_deref(), Some("To 22"));
        // optional fields defaulted
        assert_eq!(result.entities[2].id, "");
        assert_eq!(result.entities[2].transfers, 0);
        assert_eq!(result.entities[2].entity_type, EntityType::Station);
    }

    #[test]
    fn test_missing_name_is_parse_error() {
        let body = r#"{"items": [{"coord": {"lat": 35.0, "lon": 139.0}, "time": 3}]}"#;
        match parse_response(body) {
            Err(ReachError::ParseError(msg)) => assert!(msg.contains("name")),
            other => panic!("expected parse error, found {other:?}"),
        }
    }

    #[test]
    fn test_missing_coord_is_parse_error() {
        let body = r#"{"items": [{"name": "Kayabacho", "time": 3}]}"#;
        assert!(matches!(
            parse_response(body),
            Err(ReachError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_items_is_parse_error() {
        assert!(matches!(
            parse_response(r#"{"count": 0}"#),
            Err(ReachError::ParseError(_))
        ));
    }

    #[test]
    fn test_not_json_is_parse_error() {
        assert!(matches!(
            parse_response("<html>bad gateway</html>"),
            Err(ReachError::ParseError(_))
        ));
    }

    #[test]
    fn test_upstream_polygon_passed_through() {
        let body = r#"{
            "items": [],
            "polygon": [
                {"lat": 35.70, "lon": 139.77},
                {"lat": 35.68, "lon": 139.80},
                {"lat": 35.66, "lon": 139.77},
                {"lat": 35.68, "lon": 139.74}
            ]
        }"#;
        let result = parse_response(body).unwrap();
        assert_eq!(
            result.polygon.unwrap().lat_lon_pairs(),
            vec![
                (35.70, 139.77),
                (35.68, 139.80),
                (35.66, 139.77),
                (35.68, 139.74)
            ]
        );
    }

    #[test]
    fn test_no_polygon_left_to_caller() {
        let body = r#"{"items": [
            {"name": "A", "coord": {"lat": 35.70, "lon": 139.77}, "time": 5},
            {"name": "B", "coord": {"lat": 35.68, "lon": 139.80}, "time": 9}
        ]}"#;
        let result = parse_response(body).unwrap();
        assert_eq!(result.entities.len(), 2);
        assert!(result.polygon.is_none());
    }
}
