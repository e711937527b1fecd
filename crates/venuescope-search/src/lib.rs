//! VenueScope Search - Proximity search orchestration
//!
//! This crate implements the venue use cases: adding venues, listing them,
//! and radius search with category filtering over any `VenueStore`.

pub mod models;
pub mod service;

pub use models::RankedVenue;
pub use service::VenueService;
