//! Facet Catalog Module
//!
//! The static table of facets exposed by the search API.
//!
//! ## Overview
//! Each facet ties a Solr field to a display label (the key used in the JSON
//! facet request and response) and to the URL query parameter that carries the
//! user's selected values. Facets are either **top-level** (product fields) or
//! **nested** (SKU fields living in child documents).
//!
//! The catalog is built once at startup and shared read-only (`Arc<FacetCatalog>`)
//! between the query builder, the response normalizer and the HTTP handlers.

pub mod types;

#[cfg(test)]
mod tests;
