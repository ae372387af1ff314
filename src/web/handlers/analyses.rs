// Analysis list and detail handlers.
//
// GET /api/analyses      — paginated summaries, optional ?platform= filter
// GET /api/analyses/{id} — full analysis with comment shaping
//
// The list endpoint returns summaries without comment bodies; the detail
// endpoint returns the full stored analysis and can filter/sort its comment
// list server-side so dashboards don't have to.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::db::models::{Analysis, Platform, ScoredComment};
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct AnalysesQuery {
    /// Filter by platform: youtube | instagram
    pub platform: Option<String>,
    /// Page number (1-based)
    pub page: Option<usize>,
    /// Results per page (default 50, max 200)
    pub per_page: Option<usize>,
}

/// GET /api/analyses — list recent analyses as summaries.
pub async fn list_analyses(
    State(state): State<AppState>,
    Query(params): Query<AnalysesQuery>,
) -> impl IntoResponse {
    let platform = params.platform.as_deref().and_then(Platform::parse);
    let analyses = state
        .db
        .get_recent_analyses(u32::MAX, platform)
        .await
        .unwrap_or_default();

    let total = analyses.len();

    // Pagination
    let per_page = params.per_page.unwrap_or(50).min(200);
    let page = params.page.unwrap_or(1).max(1);
    let offset = (page - 1) * per_page;
    let analyses: Vec<serde_json::Value> = analyses
        .iter()
        .skip(offset)
        .take(per_page)
        .map(analysis_summary)
        .collect();

    Json(serde_json::json!({
        "analyses": analyses,
        "total": total,
        "page": page,
        "per_page": per_page,
    }))
}

#[derive(Deserialize, Default)]
pub struct AnalysisQuery {
    /// Which comments to include: all | toxic | non_toxic
    pub comments: Option<String>,
    /// Sort comments by: timestamp | toxicity
    pub sort: Option<String>,
    /// Sort direction: asc | desc (default asc)
    pub order: Option<String>,
}

/// GET /api/analyses/{id} — single analysis by id.
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<AnalysisQuery>,
) -> Response {
    match state.db.get_analysis(id).await {
        Ok(Some(mut analysis)) => {
            shape_comments(&mut analysis.comments, &params);
            Json(analysis).into_response()
        }
        Ok(None) => api_error(StatusCode::NOT_FOUND, "Analysis not found"),
        Err(e) => {
            tracing::error!(error = %e, id, "DB error fetching analysis");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

// --- Helpers ---

/// Summary view of an analysis: everything except the comment bodies.
fn analysis_summary(analysis: &Analysis) -> serde_json::Value {
    serde_json::json!({
        "id": analysis.id,
        "platform": analysis.platform,
        "url": analysis.url,
        "content_id": analysis.content_id,
        "title": analysis.title,
        "creator": analysis.creator,
        "metrics": analysis.metrics,
        "stats": analysis.stats,
        "has_audio": analysis.audio.is_some(),
        "analyzed_at": analysis.analyzed_at,
    })
}

/// Apply the detail endpoint's comment filter and sort parameters in place.
///
/// Unknown parameter values are ignored rather than rejected — the stored
/// order is chronological, so the default response matches what the fetcher
/// returned.
fn shape_comments(comments: &mut Vec<ScoredComment>, params: &AnalysisQuery) {
    match params.comments.as_deref() {
        Some("toxic") => comments.retain(|c| c.is_toxic),
        Some("non_toxic") => comments.retain(|c| !c.is_toxic),
        _ => {}
    }

    match params.sort.as_deref() {
        // total_cmp gives a total order over f64, so NaN can't panic a sort
        Some("toxicity") => comments.sort_by(|a, b| a.toxicity.total_cmp(&b.toxicity)),
        // RFC 3339 timestamps in the same offset sort correctly as strings
        Some("timestamp") => {
            comments.sort_by(|a, b| a.comment.timestamp.cmp(&b.comment.timestamp))
        }
        _ => {}
    }

    if params.order.as_deref() == Some("desc") {
        comments.reverse();
    }
}
