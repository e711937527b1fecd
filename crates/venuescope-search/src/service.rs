use std::sync::Arc;
use venuescope_core::config::{SearchSettings, SearchStrategy};
use venuescope_core::error::{Result, VenueError};
use venuescope_core::models::{NewVenue, NewVenueRequest, SearchQuery, Venue, VenueId};
use venuescope_geo::distance::distance_m;
use venuescope_geo::validation::{parse_coordinate, parse_point, required_text, validate_radius};
use venuescope_store::ports::VenueStore;

use crate::models::RankedVenue;

/// Venue use cases over a `VenueStore`.
///
/// Search has two interchangeable candidate strategies. Indexed asks the
/// store for a radius query and filters by category afterwards; Scan loads
/// the category (or every venue) and measures distances here. Both end with
/// the same exact radius check and distance sort, so they return the same
/// venues in the same order.
pub struct VenueService {
    store: Arc<dyn VenueStore>,
    settings: SearchSettings,
}

impl VenueService {
    /// Create a new service with fixed search settings
    pub fn new(store: Arc<dyn VenueStore>, settings: SearchSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// The strategy searches will actually use with this store
    pub fn effective_strategy(&self) -> SearchStrategy {
        match self.settings.strategy {
            SearchStrategy::Auto if self.store.capabilities().spatial_index => {
                SearchStrategy::Indexed
            }
            SearchStrategy::Auto => SearchStrategy::Scan,
            explicit => explicit,
        }
    }

    /// Check the store is reachable and report how many venues it holds
    pub async fn health_check(&self) -> Result<usize> {
        self.store.health_check().await?;
        self.store.count().await
    }

    /// Validate and persist a new venue. Nothing is stored when validation fails.
    pub async fn add_venue(&self, request: NewVenueRequest) -> Result<Venue> {
        let name = required_text("name", request.name.as_deref())?;
        let category = required_text("type", request.category.as_deref())?;
        let location = parse_point(request.latitude.as_ref(), request.longitude.as_ref())?;

        let venue = NewVenue {
            external_id: non_blank(request.external_id),
            name,
            category,
            address: non_blank(request.address),
            location,
            image_ref: non_blank(request.image_ref),
        };

        self.store.insert(venue).await
    }

    /// All venues in creation order
    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        self.store.find_all().await
    }

    /// Get a venue by ID
    pub async fn get_venue(&self, id: VenueId) -> Result<Venue> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| VenueError::NotFound { id: id.to_string() })
    }

    /// Venues within the query radius, nearest first
    pub async fn search_venues(&self, query: &SearchQuery) -> Result<Vec<Venue>> {
        let ranked = self.search_ranked(query).await?;
        Ok(ranked.into_iter().map(|hit| hit.venue).collect())
    }

    /// Venues within the query radius with their distances, nearest first
    pub async fn search_ranked(&self, query: &SearchQuery) -> Result<Vec<RankedVenue>> {
        let center = parse_point(query.latitude.as_ref(), query.longitude.as_ref())?;
        let radius_m = match &query.radius_m {
            Some(radius) => validate_radius(parse_coordinate("radius", Some(radius))?)?,
            None => self.settings.default_radius_m,
        };
        // A blank filter means "any category"
        let category = query.category.as_deref().map(str::trim).filter(|c| !c.is_empty());

        let candidates = match self.effective_strategy() {
            SearchStrategy::Indexed => {
                let nearby = self.store.find_within_radius(center, radius_m).await?;
                match category {
                    Some(category) => {
                        nearby.into_iter().filter(|venue| venue.has_category(category)).collect()
                    }
                    None => nearby,
                }
            }
            _ => match category {
                Some(category) => self.store.find_by_category(category).await?,
                None => self.store.find_all().await?,
            },
        };

        let mut ranked: Vec<RankedVenue> = candidates
            .into_iter()
            .filter_map(|venue| {
                let distance = distance_m(&center, &venue.location);
                (distance <= radius_m).then_some(RankedVenue { venue, distance_m: distance })
            })
            .collect();

        // Stable: equal distances keep the store's creation order
        ranked.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));

        Ok(ranked)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
