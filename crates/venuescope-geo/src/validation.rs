//! Coordinate parsing and venue invariant checks.
//!
//! Raw request values are turned into numbers here and nowhere else, so a
//! non-numeric coordinate becomes an `InvalidInput` error instead of a NaN
//! travelling further into the system.

use venuescope_core::error::{Result, VenueError};
use venuescope_core::models::{CoordinateInput, GeoPoint, NewVenue};

/// Parse a single coordinate value
pub fn parse_coordinate(field: &str, input: Option<&CoordinateInput>) -> Result<f64> {
    let value = match input {
        None => return Err(VenueError::invalid_input(field, "is required")),
        Some(CoordinateInput::Number(value)) => *value,
        Some(CoordinateInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(VenueError::invalid_input(field, "is required"));
            }
            text.parse::<f64>().map_err(|_| {
                VenueError::invalid_input(field, format!("'{}' is not a valid number", text))
            })?
        }
        Some(CoordinateInput::Unsupported(value)) => {
            return Err(VenueError::invalid_input(field, format!("{} is not a number", value)));
        }
    };

    if !value.is_finite() {
        return Err(VenueError::invalid_input(field, "must be a finite number"));
    }

    Ok(value)
}

/// Parse and range-check a latitude/longitude pair
pub fn parse_point(
    latitude: Option<&CoordinateInput>,
    longitude: Option<&CoordinateInput>,
) -> Result<GeoPoint> {
    let latitude = parse_coordinate("latitude", latitude)?;
    let longitude = parse_coordinate("longitude", longitude)?;
    let point = GeoPoint::new(latitude, longitude);
    validate_point(&point)?;
    Ok(point)
}

/// Check that a point is finite and within WGS-84 ranges
pub fn validate_point(point: &GeoPoint) -> Result<()> {
    if !point.latitude.is_finite() || !(-90.0..=90.0).contains(&point.latitude) {
        return Err(VenueError::invalid_input(
            "latitude",
            format!("{} is outside [-90, 90]", point.latitude),
        ));
    }
    if !point.longitude.is_finite() || !(-180.0..=180.0).contains(&point.longitude) {
        return Err(VenueError::invalid_input(
            "longitude",
            format!("{} is outside [-180, 180]", point.longitude),
        ));
    }
    Ok(())
}

/// Check that a search radius is a positive number of meters
pub fn validate_radius(radius_m: f64) -> Result<f64> {
    if radius_m.is_finite() && radius_m > 0.0 {
        Ok(radius_m)
    } else {
        Err(VenueError::invalid_input("radius", format!("{} is not a positive distance", radius_m)))
    }
}

/// Require a non-blank string field, returning it trimmed
pub fn required_text(field: &str, value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(VenueError::invalid_input(field, "is required")),
    }
}

/// Check the invariants every stored venue must satisfy
pub fn validate_new_venue(venue: &NewVenue) -> Result<()> {
    if venue.name.trim().is_empty() {
        return Err(VenueError::invalid_input("name", "is required"));
    }
    if venue.category.trim().is_empty() {
        return Err(VenueError::invalid_input("type", "is required"));
    }
    if let Some(external_id) = &venue.external_id {
        if external_id.trim().is_empty() {
            return Err(VenueError::invalid_input("externalId", "must not be blank"));
        }
    }
    validate_point(&venue.location)
}
