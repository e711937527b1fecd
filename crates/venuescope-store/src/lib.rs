//! VenueScope Store - Venue persistence ports and adapters
//!
//! This crate defines the `VenueStore` port and provides an in-memory adapter
//! (with an optional R-tree) and a PostgreSQL/PostGIS adapter.

pub mod memory;
pub mod ports;
pub mod postgres;

pub use memory::MemoryVenueStore;
pub use ports::{StoreCapabilities, VenueStore};
