//! Backend of the sliding window explorer.
//!
//!
//!
//! # General Infrastructure
//! - Single axum process serving JSON under `/api`
//! - The frontend renders the visualization, the backend only computes
//! - Every computation is delegated to the `engine` crate, which is pure
//! - Code snippets come from the `catalog` crate, compiled into the binary
//! - Reviews live in process memory, bounded, nothing is persisted
//!
//!
//!
//! # Routes
//!
//! | route | purpose |
//! |-------|---------|
//! | `POST /api/validate_input` | parse raw text into a sequence |
//! | `POST /api/calculate_step` | one algorithm at one window position, or one search |
//! | `POST /api/slide` | a fixed window slid across every position |
//! | `POST /api/generate_code` | example code for an algorithm |
//! | `POST /api/reviews` | submit a 0-5 star review |
//! | `GET /api/reviews` | newest reviews, `?limit=` capped by `REVIEW_PAGE_SIZE` |
//! | `GET /api/reviews/summary` | count, average and per-star distribution |
//!
//! Failures answer with a status code and `{"error": "..."}`, except input
//! validation which answers `{"valid": false, "error": "..."}`.
//!
//!
//!
//! # Environment
//!
//! - `SLIDE_PORT`: listening port, default 5000
//! - `FEEDBACK_MAX_LEN`: feedback characters kept per review, default 1000
//! - `REVIEW_PAGE_SIZE`: most reviews returned at once, default 20
//! - `MAX_STORED_REVIEWS`: reviews kept in memory before the oldest are dropped, default 10000
//! - `CORS_MAX_AGE_SECS`: preflight cache lifetime, default 3600
//! - `RUST_LOG`: log filter, e.g. `RUST_LOG=server=debug`
//!
//!
//!
//! # Setup
//!
//! Run the server.
//! ```sh
//! cargo run -p slide
//! ```
//!
//! Evaluate a step.
//! ```sh
//! curl -X POST localhost:5000/api/calculate_step \
//!   -H 'content-type: application/json' \
//!   -d '{"elements": [1, 2, 3, 4, 5], "window_start": 0, "window_size": 3, "algorithm": "sum"}'
//! ```
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod reviews;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use routes::{
    calculate_step_handler, generate_code_handler, list_reviews_handler, review_summary_handler,
    slide_handler, submit_review_handler, validate_input_handler,
};
use state::AppState;

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config);

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(state.config.cors_max_age);

    Router::new()
        .route("/api/validate_input", post(validate_input_handler))
        .route("/api/calculate_step", post(calculate_step_handler))
        .route("/api/slide", post(slide_handler))
        .route("/api/generate_code", post(generate_code_handler))
        .route(
            "/api/reviews",
            get(list_reviews_handler).post(submit_review_handler),
        )
        .route("/api/reviews/summary", get(review_summary_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
