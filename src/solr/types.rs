use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Error object Solr embeds in failed responses.
#[derive(Debug, Deserialize)]
pub struct EngineError {
    pub msg: Option<String>,
    pub code: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Option<EngineError>,
}

/// Raw JSON Request API response.
///
/// Documents and facets stay as JSON objects here; the normalizer validates
/// their shape field by field.
#[derive(Debug, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub response: DocList,
    /// Facet name -> facet body, in engine order. Contains the reserved `count` key.
    #[serde(default)]
    pub facets: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DocList {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<Map<String, Value>>,
}

/// Raw suggester response: dictionary -> query term -> suggestions.
#[derive(Debug, Default, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggest: HashMap<String, HashMap<String, SuggestTermBody>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestTermBody {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    #[serde(default)]
    pub suggestions: Vec<SuggestedTerm>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestedTerm {
    pub term: String,
}
