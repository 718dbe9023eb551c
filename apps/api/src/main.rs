mod config;
mod errors;
mod essay;
mod matching;
mod models;
mod recommender;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::catalog::Catalog;
use crate::recommender::{RecommendationClient, Recommender};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemoryProfileStore, ProfileStore, RedisProfileStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scholarship Finder API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Arc::new(Catalog::builtin());
    info!("Scholarship catalog loaded ({} entries)", catalog.len());

    let profiles: Arc<dyn ProfileStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisProfileStore::open(url, config.profile_key.clone())?),
        None => {
            warn!("REDIS_URL not set; saved profiles are kept in memory only");
            Arc::new(MemoryProfileStore::default())
        }
    };

    let recommender: Option<Arc<dyn Recommender>> = match &config.recommender_url {
        Some(url) => {
            let client = RecommendationClient::new(url.clone(), config.recommender_timeout)?;
            info!(
                "Recommendation client initialized ({}, timeout {:?})",
                client.endpoint(),
                config.recommender_timeout
            );
            Some(Arc::new(client))
        }
        None => {
            info!("RECOMMENDER_URL not set; searches use the local catalog");
            None
        }
    };

    let state = AppState {
        catalog,
        profiles,
        recommender,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
