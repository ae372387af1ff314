// Web server — Axum-based JSON API over the analysis pipeline.
//
// Every route serves JSON; there is no embedded UI. Dashboards and scripts
// consume the API directly.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::db::Database;
use crate::platforms::instagram::MockInstagramFetcher;
use crate::platforms::traits::ContentFetcher;
use crate::platforms::youtube::MockYouTubeFetcher;
use crate::toxicity::keyword::KeywordScorer;
use crate::toxicity::traits::ToxicityScorer;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub config: Arc<Config>,
    pub scorer: Arc<dyn ToxicityScorer>,
    pub youtube: Arc<dyn ContentFetcher>,
    pub instagram: Arc<dyn ContentFetcher>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    db: Arc<dyn Database>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState {
        db,
        config: Arc::new(config),
        scorer: Arc::new(KeywordScorer::new()),
        youtube: Arc::new(MockYouTubeFetcher::new()),
        instagram: Arc::new(MockInstagramFetcher::new()),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("ToxicScan API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/analyze/youtube",
            post(handlers::analyze::analyze_youtube),
        )
        .route(
            "/api/analyze/instagram",
            post(handlers::analyze::analyze_instagram),
        )
        .route("/api/analyses", get(handlers::analyses::list_analyses))
        .route("/api/analyses/{id}", get(handlers::analyses::get_analysis))
        .route("/api/status", get(handlers::status::get_status))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deployment health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
