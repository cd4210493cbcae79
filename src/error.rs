//! Crate-wide error type.
//!
//! Every failure on the request path (engine transport, engine-reported error,
//! unexpected response shape) aborts the current request and is rendered as a
//! `500 Internal Server Error` carrying the error message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Solr answered, but reported a failure (error object or non-2xx status).
    #[error("search engine error: {0}")]
    Engine(String),

    #[error("search engine request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The engine response did not have the expected structure.
    #[error("malformed response: `{field}` is missing or is not {expected}")]
    MalformedResponse {
        field: String,
        expected: &'static str,
    },

    #[error("invalid facet catalog: {0}")]
    Catalog(String),
}

impl Error {
    pub fn malformed(field: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedResponse {
            field: field.into(),
            expected,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
