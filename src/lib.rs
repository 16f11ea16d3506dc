//! Threatboard - Global cybersecurity incident dashboard
//!
//! Loads the incident dataset once at startup and serves per-year charts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       THREATBOARD                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌─────────────┐   ┌─────────────────────┐  │
//! │  │  Router   │──▶│ Year Filter │──▶│ Analytics (6 tables)│  │
//! │  │  (Axum)   │   └─────────────┘   └──────────┬──────────┘  │
//! │  └─────┬─────┘                                ▼             │
//! │        │                            ┌───────────────────┐   │
//! │        │◀───────── HTML ────────────│ Charts + Template │   │
//! │        │                            └───────────────────┘   │
//! │        ▼                                                    │
//! │  ┌─────────────────────┐                                    │
//! │  │ Dataset (read-only) │◀── CSV, loaded once                │
//! │  └─────────────────────┘                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod analytics;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod handlers;
pub mod models;
pub mod templates;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

use config::Config;
use dataset::Dataset;
use templates::Templates;

/// Shared application state
///
/// The dataset is never mutated after startup, so it is shared without a lock.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub templates: Arc<Templates>,
    pub config: Config,
}

impl AppState {
    pub fn new(dataset: Dataset, config: Config) -> Result<Self, minijinja::Error> {
        Ok(Self {
            dataset: Arc::new(dataset),
            templates: Arc::new(Templates::new()?),
            config,
        })
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/v1/summary", get(handlers::reports::summary))
        .route("/api/v1/years", get(handlers::reports::years))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        );

    Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
