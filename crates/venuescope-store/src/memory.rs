//! In-memory venue store for development and testing.
//!
//! Venues live in a `Vec` in creation order; the slot number doubles as the
//! R-tree key. A poisoned lock is reported as `StoreUnavailable`. For
//! production workloads, use the PostgreSQL backend.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use venuescope_core::error::{Result, VenueError};
use venuescope_core::models::{GeoPoint, NewVenue, Venue, VenueId};
use venuescope_geo::distance::distance_m;
use venuescope_geo::validation::validate_new_venue;
use venuescope_geo::VenueIndex;

use crate::ports::{StoreCapabilities, VenueStore};

/// In-memory implementation of VenueStore
#[derive(Debug, Clone)]
pub struct MemoryVenueStore {
    state: Arc<RwLock<MemoryState>>,
    indexed: bool,
}

#[derive(Debug, Default)]
struct MemoryState {
    venues: Vec<Venue>,
    slots_by_id: HashMap<VenueId, usize>,
    slots_by_external_id: HashMap<String, usize>,
    index: VenueIndex,
}

impl MemoryVenueStore {
    /// Create a store that answers radius queries from an R-tree
    pub fn new() -> Self {
        Self { state: Arc::new(RwLock::new(MemoryState::default())), indexed: true }
    }

    /// Create a store without a spatial index; radius queries scan every venue
    pub fn scan_only() -> Self {
        Self { state: Arc::new(RwLock::new(MemoryState::default())), indexed: false }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| VenueError::store_unavailable("in-memory venue store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| VenueError::store_unavailable("in-memory venue store lock poisoned"))
    }
}

impl Default for MemoryVenueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryState {
    fn scan_within(&self, center: &GeoPoint, max_distance_m: f64) -> Vec<(usize, f64)> {
        let mut hits: Vec<(usize, f64)> = self
            .venues
            .iter()
            .enumerate()
            .filter_map(|(slot, venue)| {
                let distance = distance_m(center, &venue.location);
                (distance <= max_distance_m).then_some((slot, distance))
            })
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        hits
    }
}

#[async_trait]
impl VenueStore for MemoryVenueStore {
    fn capabilities(&self) -> StoreCapabilities {
        StoreCapabilities { spatial_index: self.indexed }
    }

    async fn insert(&self, venue: NewVenue) -> Result<Venue> {
        validate_new_venue(&venue)?;

        let mut state = self.write()?;

        if let Some(external_id) = &venue.external_id {
            if state.slots_by_external_id.contains_key(external_id) {
                return Err(VenueError::DuplicateKey { key: format!("externalId={}", external_id) });
            }
        }

        let slot = state.venues.len();
        let venue = Venue::from_new(VenueId::new(), venue, Utc::now());

        if let Some(external_id) = &venue.external_id {
            state.slots_by_external_id.insert(external_id.clone(), slot);
        }
        state.slots_by_id.insert(venue.id, slot);
        if self.indexed {
            state.index.insert(slot, &venue.location);
        }
        state.venues.push(venue.clone());

        Ok(venue)
    }

    async fn find_by_id(&self, id: VenueId) -> Result<Option<Venue>> {
        let state = self.read()?;
        Ok(state.slots_by_id.get(&id).map(|slot| state.venues[*slot].clone()))
    }

    async fn find_all(&self) -> Result<Vec<Venue>> {
        Ok(self.read()?.venues.clone())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Venue>> {
        let state = self.read()?;
        Ok(state.venues.iter().filter(|venue| venue.has_category(category)).cloned().collect())
    }

    async fn find_within_radius(
        &self,
        center: GeoPoint,
        max_distance_m: f64,
    ) -> Result<Vec<Venue>> {
        let state = self.read()?;

        let hits = if self.indexed {
            state.index.query_within(&center, max_distance_m)
        } else {
            state.scan_within(&center, max_distance_m)
        };

        Ok(hits.into_iter().map(|(slot, _)| state.venues[slot].clone()).collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.read()?.venues.len())
    }

    async fn health_check(&self) -> Result<()> {
        self.read().map(|_| ())
    }
}
