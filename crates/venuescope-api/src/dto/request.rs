use serde::Deserialize;
use venuescope_core::models::{CoordinateInput, NewVenueRequest, SearchQuery};

/// Add venue request body.
///
/// Coordinates may be JSON numbers or numeric strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddVenueRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub venue_type: Option<String>,
    pub latitude: Option<CoordinateInput>,
    pub longitude: Option<CoordinateInput>,
    pub image: Option<String>,
    pub external_id: Option<String>,
    pub address: Option<String>,
}

impl From<AddVenueRequest> for NewVenueRequest {
    fn from(req: AddVenueRequest) -> Self {
        NewVenueRequest {
            name: req.name,
            category: req.venue_type,
            latitude: req.latitude,
            longitude: req.longitude,
            image_ref: req.image,
            external_id: req.external_id,
            address: req.address,
        }
    }
}

/// Proximity search request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub latitude: Option<CoordinateInput>,
    pub longitude: Option<CoordinateInput>,
    pub venue_type: Option<String>,
    /// Radius in meters, as a number or numeric string
    pub radius: Option<CoordinateInput>,
}

impl From<SearchRequest> for SearchQuery {
    fn from(req: SearchRequest) -> Self {
        SearchQuery {
            latitude: req.latitude,
            longitude: req.longitude,
            category: req.venue_type,
            radius_m: req.radius,
        }
    }
}
