use crate::solr::types::SuggestResponse;
use serde::{Deserialize, Serialize};

/// Suggester dictionary configured on the collection.
pub const DEFAULT_DICTIONARY: &str = "default";

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestResult {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    pub suggestions: Vec<Suggestion>,
}

impl SuggestResult {
    /// Picks the entry for `q` under `dictionary`. A missing dictionary or
    /// term yields an empty result.
    pub fn from_engine(mut response: SuggestResponse, dictionary: &str, q: &str) -> Self {
        let body = response
            .suggest
            .remove(dictionary)
            .and_then(|mut terms| terms.remove(q))
            .unwrap_or_default();

        Self {
            num_found: body.num_found,
            suggestions: body
                .suggestions
                .into_iter()
                .map(|s| Suggestion { term: s.term })
                .collect(),
        }
    }
}
