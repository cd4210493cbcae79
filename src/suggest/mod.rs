//! Suggest Service Module
//!
//! Type-ahead completions proxied from the Solr suggester and flattened into
//! `{ numFound, suggestions: [{ term }] }`.

pub mod handlers;
pub mod types;
