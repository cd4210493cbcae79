use super::builder::build;
use super::normalizer::normalize;
use super::types::{SearchResponse, SelectionSet};
use crate::catalog::types::FacetCatalog;
use crate::error::Result;
use crate::solr::client::SolrClient;

use axum::extract::Query;
use axum::{Extension, Json};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::Level;

/// `GET /search`
///
/// Facet selections come in as comma-separated values keyed by each facet's
/// URL parameter. `q` is the free-text query; `debug=true` echoes the engine
/// payload back under `query`.
pub async fn handle_search(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(catalog): Extension<Arc<FacetCatalog>>,
    Extension(solr): Extension<Arc<SolrClient>>,
) -> Result<Json<SearchResponse>> {
    let params = first_values(pairs);
    let selections = SelectionSet::from_query(&catalog, &params);
    let payload = build(&catalog, &selections, params.get("q").map(String::as_str));

    if tracing::enabled!(Level::DEBUG) {
        tracing::debug!(
            "Search payload: {}",
            serde_json::to_string(&payload).unwrap_or_default()
        );
    }

    let raw = solr.query(&payload).await?;
    let (products, facets) = normalize(&catalog, &raw)?;

    tracing::debug!(
        "Search returned {} products ({} found) and {} facets",
        products.len(),
        raw.response.num_found,
        facets.len()
    );

    let debug = params.get("debug").is_some_and(|v| v == "true");

    Ok(Json(SearchResponse {
        products,
        facets,
        query: debug.then_some(payload),
    }))
}

/// Collapses repeated query parameters; the first occurrence wins.
pub fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}
