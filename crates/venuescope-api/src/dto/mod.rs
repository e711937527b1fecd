mod request;
mod response;

pub use request::{AddVenueRequest, SearchRequest};
pub use response::{AddVenueResponse, HealthResponse, VenueHit};
