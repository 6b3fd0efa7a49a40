//! Queue Observability Routes

use axum::{extract::State, routing::get, Json, Router};

use crate::services::QueueStats;
use crate::AppState;

/// Counters for in-flight and finished routing jobs
#[utoipa::path(
    get,
    path = "/queue/stats",
    responses((status = 200, description = "Current queue counters", body = QueueStats)),
    tag = "Queue"
)]
pub async fn queue_stats(State(state): State<AppState>) -> Json<QueueStats> {
    Json(state.queue.stats().await)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/queue/stats", get(queue_stats))
}
