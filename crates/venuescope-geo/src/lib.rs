//! VenueScope Geo - Distance math, coordinate validation, and the R-tree index
//!
//! Everything in this crate is synchronous and free of I/O.

pub mod distance;
pub mod index;
pub mod validation;

pub use distance::{bounding_boxes, distance_km, distance_m, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use index::{IndexedVenue, VenueIndex};
