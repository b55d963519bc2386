//! Hall booking pricing service.
//!
//! Mirrors the booking form's price negotiation on the server: official
//! pricing, the offer floor, split-the-difference settlement, and booking
//! drafts that hold a host's selections until submission.

pub mod cache;
pub mod config;
pub mod drafts;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::cache::{AppCache, CacheStats};
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cache = AppCache::new(&config);
        Self {
            config: Arc::new(config),
            cache,
        }
    }

    /// Requested currency, or the configured default
    pub fn currency<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(code) if !code.trim().is_empty() => code,
            _ => &self.config.default_currency,
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(pricing::router())
        .merge(drafts::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}
