use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::GeoPoint;

/// Unique identifier for a venue, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(pub Uuid);

impl VenueId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VenueId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for VenueId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(VenueId)
    }
}

/// A persisted venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueId,

    /// Key from an upstream place registry, unique when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    pub name: String,

    /// Venue category, e.g. "resort" or "weddingHall"
    #[serde(rename = "type")]
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    pub location: GeoPoint,

    /// URL or identifier of the venue's image
    #[serde(rename = "image", default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,

    pub last_updated: DateTime<Utc>,
}

impl Venue {
    /// Build a venue from a validated draft
    pub fn from_new(id: VenueId, draft: NewVenue, last_updated: DateTime<Utc>) -> Self {
        Self {
            id,
            external_id: draft.external_id,
            name: draft.name,
            category: draft.category,
            address: draft.address,
            location: draft.location,
            image_ref: draft.image_ref,
            last_updated,
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        category_matches(&self.category, category)
    }
}

/// Validated venue data ready to be inserted into a store
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub external_id: Option<String>,
    pub name: String,
    pub category: String,
    pub address: Option<String>,
    pub location: GeoPoint,
    pub image_ref: Option<String>,
}

impl NewVenue {
    pub fn new(name: impl Into<String>, category: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            external_id: None,
            name: name.into(),
            category: category.into(),
            address: None,
            location,
            image_ref: None,
        }
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }
}

/// Case-insensitive exact category comparison
pub fn category_matches(category: &str, filter: &str) -> bool {
    category == filter || category.to_lowercase() == filter.to_lowercase()
}
