// Analysis trigger handlers.
//
// POST /api/analyze/youtube   — body {"video_url": "..."}
// POST /api/analyze/instagram — body {"reel_url": "..."}
//
// Both validate the URL shape, run the fetch → score → aggregate pipeline,
// store the result, and return the stored analysis as JSON.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::db::models::Analysis;
use crate::platforms::traits::ContentFetcher;
use crate::platforms::url;
use crate::scoring::report::build_report;
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct AnalyzeVideoRequest {
    pub video_url: String,
}

#[derive(Deserialize)]
pub struct AnalyzeReelRequest {
    pub reel_url: String,
}

/// POST /api/analyze/youtube — analyze a YouTube video's comments.
pub async fn analyze_youtube(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeVideoRequest>,
) -> Response {
    if !url::is_valid_youtube_url(&req.video_url) {
        return api_error(StatusCode::BAD_REQUEST, "Invalid YouTube URL");
    }

    match run_and_store(&state, state.youtube.as_ref(), &req.video_url).await {
        Ok(analysis) => Json(analysis).into_response(),
        Err(e) => {
            tracing::error!(error = %e, url = %req.video_url, "YouTube analysis failed");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to analyze YouTube video",
            )
        }
    }
}

/// POST /api/analyze/instagram — analyze an Instagram reel's comments.
pub async fn analyze_instagram(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeReelRequest>,
) -> Response {
    if !url::is_valid_instagram_url(&req.reel_url) {
        return api_error(StatusCode::BAD_REQUEST, "Invalid Instagram URL");
    }

    match run_and_store(&state, state.instagram.as_ref(), &req.reel_url).await {
        Ok(analysis) => Json(analysis).into_response(),
        Err(e) => {
            tracing::error!(error = %e, url = %req.reel_url, "Instagram analysis failed");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to analyze Instagram reel",
            )
        }
    }
}

// --- Helpers ---

/// Run the pipeline and persist the result, returning it with its row id.
async fn run_and_store(
    state: &AppState,
    fetcher: &dyn ContentFetcher,
    url_str: &str,
) -> anyhow::Result<Analysis> {
    let mut analysis = build_report(fetcher, state.scorer.as_ref(), url_str).await?;
    let id = state.db.insert_analysis(&analysis).await?;
    analysis.id = id;
    Ok(analysis)
}
