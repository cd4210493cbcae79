use super::types::{DEFAULT_DICTIONARY, SuggestParams, SuggestResult};
use crate::error::Result;
use crate::solr::client::SolrClient;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /suggest?q=...`
///
/// An empty `q` returns an empty `200` without contacting the engine.
pub async fn handle_suggest(
    Query(params): Query<SuggestParams>,
    Extension(solr): Extension<Arc<SolrClient>>,
) -> Result<Response> {
    if params.q.is_empty() {
        return Ok(StatusCode::OK.into_response());
    }

    let raw = solr.suggest(&params.q, DEFAULT_DICTIONARY).await?;
    let result = SuggestResult::from_engine(raw, DEFAULT_DICTIONARY, &params.q);

    tracing::debug!(
        "Suggest '{}' -> {} suggestions",
        params.q,
        result.suggestions.len()
    );

    Ok(Json(result).into_response())
}
