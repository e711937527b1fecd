pub mod point;
pub mod query;
pub mod venue;

pub use point::GeoPoint;
pub use query::{CoordinateInput, NewVenueRequest, SearchQuery};
pub use venue::{category_matches, NewVenue, Venue, VenueId};
