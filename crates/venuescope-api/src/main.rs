use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use venuescope_search::VenueService;
use venuescope_store::postgres::{PostgresConfig, PostgresStore};
use venuescope_store::{MemoryVenueStore, VenueStore};

use venuescope_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "venuescope_api=info,venuescope_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    let layered = config.layered_config().context("Invalid search configuration")?;
    let mut sources: Vec<_> = layered.to_inspection_map().into_iter().collect();
    sources.sort_by(|a, b| a.0.cmp(&b.0));
    for (key, (value, source)) in sources {
        tracing::info!(key = %key, value = %value, source = ?source, "Search setting");
    }
    let settings = layered.settings().context("Invalid search configuration")?;

    tracing::info!(
        port = config.port,
        default_radius_m = settings.default_radius_m,
        strategy = %settings.strategy,
        "Starting VenueScope API server"
    );

    // Storage backend is chosen by DATABASE_URL
    let (store, backend): (Arc<dyn VenueStore>, &'static str) = match &config.database_url {
        Some(_) => {
            tracing::info!("DATABASE_URL found, connecting to PostgreSQL...");
            let pg_config = PostgresConfig::from_env().context("Invalid PostgreSQL configuration")?;
            let store = PostgresStore::new(pg_config).await.context(
                "Failed to connect to PostgreSQL. Ensure it is running with PostGIS available \
                 and that DATABASE_URL is correct",
            )?;
            tracing::info!("Connected to PostgreSQL");
            (Arc::new(store), "postgres")
        }
        None => {
            tracing::info!("Using in-memory storage (set DATABASE_URL for PostgreSQL)");
            (Arc::new(MemoryVenueStore::new()), "memory")
        }
    };

    let service = VenueService::new(store, settings);
    tracing::info!(strategy = %service.effective_strategy(), "Search strategy resolved");

    let state = Arc::new(AppState::new(service, backend));

    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .with_context(|| format!("Invalid VENUESCOPE_CORS_ORIGIN: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await?;
    Ok(())
}
