use serde::Serialize;
use venuescope_core::models::Venue;

/// A search hit with its great-circle distance from the query point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedVenue {
    #[serde(flatten)]
    pub venue: Venue,

    /// Distance from the query point in meters
    pub distance_m: f64,
}

impl RankedVenue {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }
}
