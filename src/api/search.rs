use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::document::SearchDocument;
use crate::search::engine;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    /// Free-text query. Absent or empty yields an empty result array.
    #[serde(default)]
    pub q: String,
}

/// Axum handler for `GET /api/search?q=...`.
///
/// The corpus snapshot is re-read from disk on every request — no caching,
/// no invalidation. A missing or malformed corpus file fails this request
/// only; there is no retry or partial degradation.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let index_path = &state.config.index_path;
    let raw = tokio::fs::read_to_string(index_path)
        .await
        .map_err(|e| AppError::Corpus(format!("{}: {e}", index_path.display())))?;
    let docs: Vec<SearchDocument> = serde_json::from_str(&raw)
        .map_err(|e| AppError::Corpus(format!("{}: {e}", index_path.display())))?;

    let hits = engine::search(&params.q, &docs).await;
    tracing::debug!(query = %params.q, hits = hits.len(), "search request served");

    Ok((
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        Json(hits),
    ))
}
