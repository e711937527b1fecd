//! VenueScope Core - Domain models, errors, and configuration
//!
//! This crate contains the venue domain types shared by the geo, store,
//! search, and API crates.

pub mod config;
pub mod error;
pub mod models;

pub use error::{Result, VenueError};
