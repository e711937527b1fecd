use async_trait::async_trait;
use venuescope_core::error::Result;
use venuescope_core::models::{GeoPoint, NewVenue, Venue, VenueId};

/// What a store can do beyond the basic contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCapabilities {
    /// Radius queries are answered from a spatial index rather than a full scan
    pub spatial_index: bool,
}

/// Port for venue persistence and candidate lookup
#[async_trait]
pub trait VenueStore: Send + Sync {
    /// Describe the store's query capabilities
    fn capabilities(&self) -> StoreCapabilities;

    /// Insert a venue, assigning its id and `last_updated` timestamp.
    /// Fails with `DuplicateKey` when `external_id` is already taken.
    async fn insert(&self, venue: NewVenue) -> Result<Venue>;

    /// Get a venue by ID
    async fn find_by_id(&self, id: VenueId) -> Result<Option<Venue>>;

    /// All venues in creation order
    async fn find_all(&self) -> Result<Vec<Venue>>;

    /// Venues whose category equals `category` ignoring case, in creation order
    async fn find_by_category(&self, category: &str) -> Result<Vec<Venue>>;

    /// Venues within `max_distance_m` of `center`, nearest first.
    /// Stores without a spatial index must fall back to a full scan.
    async fn find_within_radius(&self, center: GeoPoint, max_distance_m: f64)
        -> Result<Vec<Venue>>;

    /// Number of stored venues
    async fn count(&self) -> Result<usize>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> Result<()>;
}
