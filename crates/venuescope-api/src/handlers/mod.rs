mod health;
mod venues;

pub use health::health_check;
pub use venues::{add_venue, get_venue, list_venues, search_venues};
