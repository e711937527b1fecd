use std::sync::Arc;
use venuescope_search::VenueService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<VenueService>,
    /// Name of the storage backend, reported by the health endpoint
    pub backend: &'static str,
}

impl AppState {
    pub fn new(service: VenueService, backend: &'static str) -> Self {
        Self { service: Arc::new(service), backend }
    }
}
