use serde::Serialize;
use venuescope_core::models::Venue;
use venuescope_search::RankedVenue;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub store: &'static str,
    pub venues: usize,
}

impl HealthResponse {
    pub fn ok(store: &'static str, venues: usize) -> Self {
        Self { status: "ok", service: "venuescope-api", store, venues }
    }
}

/// Add venue response
#[derive(Debug, Serialize)]
pub struct AddVenueResponse {
    pub success: bool,
    pub venue: Venue,
}

/// A venue in search results
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueHit {
    #[serde(flatten)]
    pub venue: Venue,
    pub distance_km: f64,
}

impl From<RankedVenue> for VenueHit {
    fn from(hit: RankedVenue) -> Self {
        let distance_km = hit.distance_km();
        Self { venue: hit.venue, distance_km }
    }
}
