//! Great-circle distance on a spherical Earth.

use geo::Rect;
use std::f64::consts::{FRAC_PI_2, PI};
use venuescope_core::models::GeoPoint;

/// Mean Earth radius used for all distance calculations
pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

/// Widening applied to bounding boxes so rounding never drops a point that
/// the exact distance check would keep (~0.1 m).
const BOX_PADDING_DEG: f64 = 1e-6;

/// Haversine distance between two points in kilometers.
///
/// Returns exactly `0.0` for identical points and stays finite for antipodal
/// points and across the antimeridian.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h marginally outside [0, 1] near antipodes
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two points in meters
pub fn distance_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    distance_km(a, b) * 1000.0
}

/// Longitude/latitude boxes that together enclose every point within
/// `radius_m` of `center`.
///
/// Returns two boxes when the circle crosses the antimeridian, and a single
/// full-longitude band when it covers a pole.
pub fn bounding_boxes(center: &GeoPoint, radius_m: f64) -> Vec<Rect<f64>> {
    let angular = radius_m / EARTH_RADIUS_M;
    if angular >= PI {
        return vec![Rect::new((-180.0, -90.0), (180.0, 90.0))];
    }

    let lat = center.latitude.to_radians();
    let min_lat = lat - angular;
    let max_lat = lat + angular;

    if min_lat <= -FRAC_PI_2 || max_lat >= FRAC_PI_2 {
        let south = (min_lat.to_degrees() - BOX_PADDING_DEG).max(-90.0);
        let north = (max_lat.to_degrees() + BOX_PADDING_DEG).min(90.0);
        return vec![Rect::new((-180.0, south), (180.0, north))];
    }

    let south = min_lat.to_degrees() - BOX_PADDING_DEG;
    let north = max_lat.to_degrees() + BOX_PADDING_DEG;

    let ratio = angular.sin() / lat.cos();
    if ratio >= 1.0 {
        return vec![Rect::new((-180.0, south), (180.0, north))];
    }

    let delta_lon = ratio.asin().to_degrees() + BOX_PADDING_DEG;
    let west = center.longitude - delta_lon;
    let east = center.longitude + delta_lon;

    if west < -180.0 {
        vec![
            Rect::new((west + 360.0, south), (180.0, north)),
            Rect::new((-180.0, south), (east, north)),
        ]
    } else if east > 180.0 {
        vec![
            Rect::new((west, south), (180.0, north)),
            Rect::new((-180.0, south), (east - 360.0, north)),
        ]
    } else {
        vec![Rect::new((west, south), (east, north))]
    }
}
