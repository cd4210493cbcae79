//! Multi-Select Facet Search Library
//!
//! Request shaping and response flattening for a faceted-search UI backed by a
//! Solr collection of products with nested SKU documents.
//!
//! ## Modules
//! - **`catalog`**: The static facet table (field, label, URL parameter, scope).
//! - **`search`**: The query builder, the response normalizer and the `/search` endpoint.
//! - **`suggest`**: The `/suggest` type-ahead endpoint.
//! - **`solr`**: HTTP client and raw response types for the engine.
//! - **`server`**: Axum router wiring the endpoints together.
//! - **`config`**: Command-line / environment configuration.
//! - **`error`**: Crate-wide error type and its HTTP mapping.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod solr;
pub mod suggest;

#[cfg(test)]
pub(crate) mod test_support;
