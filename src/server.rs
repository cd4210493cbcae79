use crate::catalog::types::FacetCatalog;
use crate::search::handlers::handle_search;
use crate::solr::client::SolrClient;
use crate::suggest::handlers::handle_suggest;

use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the public HTTP API.
pub fn router(catalog: Arc<FacetCatalog>, solr: Arc<SolrClient>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .route("/suggest", get(handle_suggest))
        .layer(Extension(catalog))
        .layer(Extension(solr))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
