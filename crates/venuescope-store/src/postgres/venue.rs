use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use venuescope_core::error::{Result, VenueError};
use venuescope_core::models::{GeoPoint, NewVenue, Venue, VenueId};
use venuescope_geo::validation::validate_new_venue;
use venuescope_geo::EARTH_RADIUS_M;

use super::PostgresStore;
use crate::ports::{StoreCapabilities, VenueStore};

/// Sphere radius PostGIS uses for `geography` math with `use_spheroid = false`
const POSTGIS_SPHERE_RADIUS_M: f64 = 6_371_008.7714;

const VENUE_COLUMNS: &str = r#"
    id, external_id, name, category, address,
    ST_X(location::geometry) AS longitude,
    ST_Y(location::geometry) AS latitude,
    image_ref, last_updated
"#;

#[derive(Debug, sqlx::FromRow)]
struct VenueRow {
    id: Uuid,
    external_id: Option<String>,
    name: String,
    category: String,
    address: Option<String>,
    longitude: f64,
    latitude: f64,
    image_ref: Option<String>,
    last_updated: DateTime<Utc>,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Venue {
            id: VenueId(row.id),
            external_id: row.external_id,
            name: row.name,
            category: row.category,
            address: row.address,
            location: GeoPoint::new(row.latitude, row.longitude),
            image_ref: row.image_ref,
            last_updated: row.last_updated,
        }
    }
}

/// Convert a radius on the 6371 km sphere into the equivalent PostGIS
/// radius, so both agree on which venues are inside. The slack keeps
/// boundary points from being dropped by rounding; the search layer
/// re-checks every candidate against the exact radius.
pub(crate) fn postgis_radius(max_distance_m: f64) -> f64 {
    max_distance_m * (POSTGIS_SPHERE_RADIUS_M / EARTH_RADIUS_M) * (1.0 + 1e-9)
}

fn map_sqlx_error(context: &str, err: sqlx::Error) -> VenueError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let key = db_err.constraint().unwrap_or("unique constraint").to_string();
            return VenueError::DuplicateKey { key };
        }
    }
    VenueError::store_unavailable(format!("{}: {}", context, err))
}

#[async_trait]
impl VenueStore for PostgresStore {
    fn capabilities(&self) -> StoreCapabilities {
        StoreCapabilities { spatial_index: true }
    }

    async fn insert(&self, venue: NewVenue) -> Result<Venue> {
        validate_new_venue(&venue)?;

        let query = format!(
            r#"
            INSERT INTO venues (id, external_id, name, category, address, location, image_ref)
            VALUES ($1, $2, $3, $4, $5, ST_SetSRID(ST_MakePoint($6, $7), 4326)::geography, $8)
            RETURNING {}
            "#,
            VENUE_COLUMNS
        );

        let row: VenueRow = sqlx::query_as(&query)
            .bind(Uuid::new_v4())
            .bind(&venue.external_id)
            .bind(&venue.name)
            .bind(&venue.category)
            .bind(&venue.address)
            .bind(venue.location.longitude)
            .bind(venue.location.latitude)
            .bind(&venue.image_ref)
            .fetch_one(self.pool())
            .await
            .map_err(|e| map_sqlx_error("Failed to insert venue", e))?;

        tracing::debug!(venue_id = %row.id, category = %row.category, "Inserted venue");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: VenueId) -> Result<Option<Venue>> {
        let query = format!("SELECT {} FROM venues WHERE id = $1", VENUE_COLUMNS);

        let row: Option<VenueRow> = sqlx::query_as(&query)
            .bind(id.0)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| map_sqlx_error("Failed to get venue", e))?;

        Ok(row.map(Venue::from))
    }

    async fn find_all(&self) -> Result<Vec<Venue>> {
        let query = format!("SELECT {} FROM venues ORDER BY seq", VENUE_COLUMNS);

        let rows: Vec<VenueRow> = sqlx::query_as(&query)
            .fetch_all(self.pool())
            .await
            .map_err(|e| map_sqlx_error("Failed to list venues", e))?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Venue>> {
        let query = format!(
            "SELECT {} FROM venues WHERE lower(category) = lower($1) ORDER BY seq",
            VENUE_COLUMNS
        );

        let rows: Vec<VenueRow> = sqlx::query_as(&query)
            .bind(category)
            .fetch_all(self.pool())
            .await
            .map_err(|e| map_sqlx_error("Failed to query venues by category", e))?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn find_within_radius(
        &self,
        center: GeoPoint,
        max_distance_m: f64,
    ) -> Result<Vec<Venue>> {
        // ST_DWithin on a geography column is answered from the GiST index
        let query = format!(
            r#"
            SELECT {}
            FROM venues
            WHERE ST_DWithin(location, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3, false)
            ORDER BY ST_Distance(location, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, false),
                     seq
            "#,
            VENUE_COLUMNS
        );

        let rows: Vec<VenueRow> = sqlx::query_as(&query)
            .bind(center.longitude)
            .bind(center.latitude)
            .bind(postgis_radius(max_distance_m))
            .fetch_all(self.pool())
            .await
            .map_err(|e| map_sqlx_error("Failed to execute radius query", e))?;

        tracing::debug!(
            latitude = center.latitude,
            longitude = center.longitude,
            max_distance_m,
            matches = rows.len(),
            "Radius query"
        );

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(self.pool())
            .await
            .map_err(|e| map_sqlx_error("Failed to count venues", e))?;

        Ok(count as usize)
    }

    async fn health_check(&self) -> Result<()> {
        self.health_check_inner().await
    }
}
