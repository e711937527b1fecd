use serde::{Deserialize, Serialize};

/// A coordinate as received from a caller: either a JSON number or a
/// numeric string such as `"28.6139"`. Parsing happens in one explicit
/// validation step (see `venuescope_geo::validation`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    Number(f64),
    Text(String),
    /// Any other JSON value (bool, array, object); always rejected by validation
    Unsupported(serde_json::Value),
}

impl From<f64> for CoordinateInput {
    fn from(value: f64) -> Self {
        CoordinateInput::Number(value)
    }
}

impl From<&str> for CoordinateInput {
    fn from(value: &str) -> Self {
        CoordinateInput::Text(value.to_string())
    }
}

impl From<String> for CoordinateInput {
    fn from(value: String) -> Self {
        CoordinateInput::Text(value)
    }
}

/// Proximity search request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub latitude: Option<CoordinateInput>,
    pub longitude: Option<CoordinateInput>,

    /// Exact, case-insensitive category filter
    pub category: Option<String>,

    /// Search radius in meters, as a number or numeric string; the
    /// configured default applies when absent
    pub radius_m: Option<CoordinateInput>,
}

impl SearchQuery {
    /// Create a query centered on the given coordinates
    pub fn at(latitude: impl Into<CoordinateInput>, longitude: impl Into<CoordinateInput>) -> Self {
        Self {
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
            ..Default::default()
        }
    }

    /// Set the category filter
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the search radius in meters
    pub fn radius_m(mut self, radius_m: f64) -> Self {
        self.radius_m = Some(CoordinateInput::Number(radius_m));
        self
    }
}

/// Unvalidated "add venue" request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewVenueRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub latitude: Option<CoordinateInput>,
    pub longitude: Option<CoordinateInput>,
    pub image_ref: Option<String>,
    pub external_id: Option<String>,
    pub address: Option<String>,
}

impl NewVenueRequest {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        latitude: impl Into<CoordinateInput>,
        longitude: impl Into<CoordinateInput>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            latitude: Some(latitude.into()),
            longitude: Some(longitude.into()),
            ..Default::default()
        }
    }

    pub fn image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
