use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::ReachError;

/// the fixed starting point of a reachability query, in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub lat: f64,
    pub lon: f64,
}

impl Origin {
    pub fn new(lat: f64, lon: f64) -> Result<Origin, ReachError> {
        let lat = validate_lat(lat).map_err(ReachError::ConfigurationError)?;
        let lon = validate_lon(lon).map_err(ReachError::ConfigurationError)?;
        Ok(Origin { lat, lon })
    }

    /// the `start` query parameter, formatted as "lat,lon"
    pub fn start_param(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }

    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

fn validate_lat(lat: f64) -> Result<f64, String> {
    validate_range(lat, -90.0, 90.0).map_err(|e| format!("invalid latitude: {e}"))
}

fn validate_lon(lon: f64) -> Result<f64, String> {
    validate_range(lon, -180.0, 180.0).map_err(|e| format!("invalid longitude: {e}"))
}

fn validate_range(v: f64, min: f64, max: f64) -> Result<f64, String> {
    if !v.is_finite() {
        Err(format!("not a number: {v}"))
    } else if v < min || max < v {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::Origin;
    use crate::ReachError;

    #[test]
    fn test_start_param() {
        let origin = Origin::new(35.6817137, 139.7777797).unwrap();
        assert_eq!(origin.start_param(), "35.6817137,139.7777797");
    }

    #[test]
    fn test_latitude_out_of_range() {
        let result = Origin::new(91.0, 139.0);
        match result {
            Err(ReachError::ConfigurationError(msg)) => assert!(msg.contains("latitude")),
            other => panic!("expected configuration error, found {other:?}"),
        }
    }

    #[test]
    fn test_longitude_out_of_range() {
        let result = Origin::new(35.0, -180.5);
        match result {
            Err(ReachError::ConfigurationError(msg)) => assert!(msg.contains("longitude")),
            other => panic!("expected configuration error, found {other:?}"),
        }
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Origin::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(Origin::new(-90.0, 180.0).is_ok());
        assert!(Origin::new(90.0, -180.0).is_ok());
    }
}
