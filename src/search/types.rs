use crate::catalog::types::FacetCatalog;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Selected filter values for one request, keyed by facet URL parameter.
///
/// Empty strings are never stored, so a parameter with no usable values is
/// indistinguishable from an absent one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    values: HashMap<String, Vec<String>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the catalog's parameters out of raw query-string pairs,
    /// splitting each on `,`. Parameters outside the catalog are ignored.
    pub fn from_query(catalog: &FacetCatalog, params: &HashMap<String, String>) -> Self {
        let mut selections = Self::new();
        for (param, raw) in params {
            if let Some(facet) = catalog.by_url_parameter(param) {
                selections.select(&facet.url_parameter, raw.split(','));
            }
        }
        selections
    }

    /// Adds values for a parameter, dropping empty entries.
    pub fn select<I, S>(&mut self, url_parameter: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.values.entry(url_parameter.to_string()).or_default();
        entry.extend(
            values
                .into_iter()
                .map(Into::into)
                .filter(|value: &String| !value.is_empty()),
        );
    }

    pub fn with<I, S>(mut self, url_parameter: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select(url_parameter, values);
        self
    }

    pub fn values(&self, url_parameter: &str) -> &[String] {
        self.values
            .get(url_parameter)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// --- Engine request payload ---

/// Solr JSON Request API body built for one search.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPayload {
    /// Block-join parent query.
    pub query: String,
    pub queries: NamedQueries,
    /// Top-level (product) filter queries.
    pub filter: Vec<String>,
    pub facet: FacetRequests,
}

/// Named sub-queries referenced as `$product`, `$sku` and `$skuFilters`.
#[derive(Debug, Clone, Serialize)]
pub struct NamedQueries {
    pub product: String,
    pub sku: String,
    #[serde(rename = "skuFilters")]
    pub sku_filters: Vec<String>,
}

/// Facet requests keyed by display name, serialized as a JSON object in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct FacetRequests(Vec<(String, TermsFacet)>);

impl FacetRequests {
    pub fn insert(&mut self, name: &str, facet: TermsFacet) {
        self.0.push((name.to_string(), facet));
    }

    pub fn get(&self, name: &str) -> Option<&TermsFacet> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }
}

impl Serialize for FacetRequests {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, facet) in &self.0 {
            map.serialize_entry(name, facet)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TermsFacet {
    #[serde(rename = "type")]
    pub kind: String,
    pub field: String,
    /// `-1` returns every bucket.
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<FacetDomain>,
    pub facet: BucketStats,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetDomain {
    pub exclude_tags: String,
    pub filter: Vec<String>,
}

/// Per-bucket sub-aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct BucketStats {
    #[serde(rename = "productCount")]
    pub product_count: String,
}

// --- API response ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    #[serde(rename = "productType")]
    pub product_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetBucket {
    pub val: String,
    /// Matching SKUs (leaf documents) in this bucket.
    #[serde(rename = "skuCount")]
    pub sku_count: u64,
    /// Distinct products owning those SKUs.
    #[serde(rename = "productCount")]
    pub product_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetResult {
    pub name: String,
    /// URL parameter to use when the UI selects a bucket of this facet.
    pub param: String,
    pub buckets: Vec<FacetBucket>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub products: Vec<ResultRecord>,
    pub facets: Vec<FacetResult>,
    /// Engine payload, echoed only when `debug=true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryPayload>,
}
