// GET /api/status — returns analysis counts and the most recent run time.
//
// Combines overall and per-platform totals in one payload so the dashboard
// can render its header without a separate round-trip per platform.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::db::models::Platform;
use crate::web::AppState;

pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let total = state.db.count_analyses(None).await.unwrap_or(0);
    let youtube = state
        .db
        .count_analyses(Some(Platform::Youtube))
        .await
        .unwrap_or(0);
    let instagram = state
        .db
        .count_analyses(Some(Platform::Instagram))
        .await
        .unwrap_or(0);

    let last_analyzed_at = state
        .db
        .get_recent_analyses(1, None)
        .await
        .ok()
        .and_then(|mut v| v.pop())
        .map(|a| a.analyzed_at);

    Json(serde_json::json!({
        "total": total,
        "platforms": {
            "youtube": youtube,
            "instagram": instagram,
        },
        "last_analyzed_at": last_analyzed_at,
    }))
}
