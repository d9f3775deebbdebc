use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::error::ProxyError;
use crate::observability::metrics::get_metrics;
use crate::server::server::AppState;
use crate::spotify::types::Track;

/// Response body for a successful mood search. `tracks` may be empty.
#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub mood: String,
    pub tracks: Vec<Track>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/{mood}", get(search_by_mood))
}

async fn search_by_mood(State(state): State<AppState>, Path(mood): Path<String>) -> Response {
    let metrics = get_metrics().await;
    metrics.mood_requests.inc();

    match fetch_tracks(&state, &mood).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            // detail stays server-side; the caller gets an opaque failure
            error!("failed to fetch tracks for mood '{}': {}", mood, err);
            metrics.request_failures.inc();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch tracks" })),
            )
                .into_response()
        }
    }
}

async fn fetch_tracks(state: &AppState, mood: &str) -> Result<MoodResponse, ProxyError> {
    let token = state.tokens.get_valid_token().await?;
    let tracks = state.search.search_tracks(mood, &token).await?;
    Ok(MoodResponse {
        mood: mood.to_owned(),
        tracks,
    })
}
