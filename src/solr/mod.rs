//! Solr Client Module
//!
//! Thin HTTP client for the two Solr endpoints the service depends on:
//! the JSON Request API (`/query`) and the suggester (`/suggest`).
//!
//! Responses are decoded into loosely-typed boundary structures
//! ([`types::QueryResponse`], [`types::SuggestResponse`]); turning them into
//! API types is the job of the `search` and `suggest` modules.

pub mod client;
pub mod types;
