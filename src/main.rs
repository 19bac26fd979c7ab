//! Thyrosight Web Server
//!
//! Thyroid disease screening front-end: serves an HTML input form, runs a
//! pre-trained classifier over submitted values, and renders the predicted
//! label back into a result page.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     THYROSIGHT                       │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌─────────────┐  │
//! │  │  HTTP     │   │  Feature     │   │  Classifier │  │
//! │  │  Routes   │──▶│  Extraction  │──▶│  (lazy,     │  │
//! │  │  (Axum)   │   │  (form data) │   │  load-once) │  │
//! │  └───────────┘   └──────────────┘   └──────┬──────┘  │
//! │                                            ▼         │
//! │                                  ┌──────────────────┐│
//! │                                  │ Artifact on disk ││
//! │                                  └──────────────────┘│
//! └──────────────────────────────────────────────────────┘
//! ```

mod classifier;
mod config;
mod error;
mod features;
mod handlers;
mod inference;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "thyrosight=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Thyrosight server starting ({})...", config.environment);
    tracing::info!("Classifier artifact: {}", config.model_path.display());

    // Build application state
    let state = AppState {
        store: inference::ModelStore::new(config.model_path.clone()),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: inference::ModelStore,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        // Both the root and the named path serve the screening form
        .route("/", get(handlers::pages::form))
        .route("/ThyroidDisease", get(handlers::pages::form))
        .route("/predictThyroidDisease", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
