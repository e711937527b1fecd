//! WGS-84 point type shared by venues and queries.
//!
//! Points serialize as GeoJSON `Point` geometries, so coordinates are always
//! written in `[longitude, latitude]` order.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees (EPSG:4326)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "PointGeometry", from = "PointGeometry")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude (no range check)
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Create a point from a GeoJSON-ordered `[longitude, latitude]` pair
    pub fn from_lon_lat(coordinates: [f64; 2]) -> Self {
        Self { latitude: coordinates[1], longitude: coordinates[0] }
    }

    /// Coordinates in GeoJSON order
    pub fn lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Both coordinates are finite and inside the WGS-84 ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum PointGeometry {
    Point { coordinates: [f64; 2] },
}

impl From<GeoPoint> for PointGeometry {
    fn from(point: GeoPoint) -> Self {
        PointGeometry::Point { coordinates: point.lon_lat() }
    }
}

impl From<PointGeometry> for GeoPoint {
    fn from(geometry: PointGeometry) -> Self {
        match geometry {
            PointGeometry::Point { coordinates } => GeoPoint::from_lon_lat(coordinates),
        }
    }
}
