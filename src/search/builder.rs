//! Facet-Query Builder
//!
//! Turns the facet catalog plus the request's selections into a Solr JSON
//! Request API payload implementing multi-select faceting over a product/SKU
//! block-join index:
//!
//! - Product filters all carry the shared [`TOP_TAG`], so nested facets can
//!   drop them from their domain and re-derive them through the join.
//! - SKU filters are tagged with their own field name, so each nested facet
//!   excludes only its own selection and keeps its siblings'.
//!
//! The builder never fails and performs no I/O. Values are copied verbatim;
//! rejecting invalid query syntax is left to the engine.

use super::types::{
    BucketStats, FacetDomain, FacetRequests, NamedQueries, QueryPayload, SelectionSet, TermsFacet,
};
use crate::catalog::types::{FacetCatalog, FacetDefinition, FacetScope};

/// Tag shared by every top-level (product) filter.
pub const TOP_TAG: &str = "top";
pub const PRODUCT_QUERY: &str = "docType:product";
pub const SKU_QUERY: &str = "docType:sku";
pub const FULL_TEXT_FIELD: &str = "_text_";
/// Distinct parent documents touched by a bucket.
pub const PRODUCT_COUNT_STAT: &str = "uniqueBlock(_root_)";

const PARENT_QUERY: &str = "{!parent tag=top filters=$skuFilters which=$product score=total v=$sku}";
const CHILD_OF_FILTERED_PRODUCTS: &str = "{!child of=$product filters=$filter v=$product}";

pub fn build(catalog: &FacetCatalog, selections: &SelectionSet, q: Option<&str>) -> QueryPayload {
    let mut product_filters = Vec::new();
    let mut sku_filters = Vec::new();
    let mut facets = FacetRequests::default();

    for facet in catalog.iter() {
        let values = selections.values(&facet.url_parameter);
        match facet.scope {
            FacetScope::TopLevel => {
                product_filters.push(term_filter(TOP_TAG, &facet.field, values));
            }
            FacetScope::Nested => {
                sku_filters.push(term_filter(&facet.field, &facet.field, values));
            }
        }
        facets.insert(&facet.display_name, terms_facet(facet));
    }

    product_filters.push(full_text_filter(q));

    QueryPayload {
        query: PARENT_QUERY.to_string(),
        queries: NamedQueries {
            product: PRODUCT_QUERY.to_string(),
            sku: SKU_QUERY.to_string(),
            sku_filters,
        },
        filter: product_filters,
        facet: facets,
    }
}

/// `{!tag=T}f:v1 OR f:v2`, or `{!tag=T}f:*` when nothing is selected.
pub fn term_filter(tag: &str, field: &str, values: &[String]) -> String {
    let clauses: Vec<String> = values
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| format!("{}:{}", field, v))
        .collect();

    if clauses.is_empty() {
        format!("{{!tag={}}}{}:*", tag, field)
    } else {
        format!("{{!tag={}}}{}", tag, clauses.join(" OR "))
    }
}

/// Top-level clause matching the free-text query against the catch-all field.
pub fn full_text_filter(q: Option<&str>) -> String {
    let term = match q {
        Some(q) if !q.is_empty() => quote_phrase(q),
        _ => "*".to_string(),
    };
    format!("{{!tag={}}}{}:{}", TOP_TAG, FULL_TEXT_FIELD, term)
}

/// Wraps `q` in double quotes, backslash-escaping only `"` and `\`.
/// Every other character, including non-ASCII, is passed through untouched.
pub fn quote_phrase(q: &str) -> String {
    let mut quoted = String::with_capacity(q.len() + 2);
    quoted.push('"');
    for c in q.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn terms_facet(facet: &FacetDefinition) -> TermsFacet {
    let domain = match facet.scope {
        FacetScope::TopLevel => None,
        // All SKUs passing every other nested filter, restricted to children
        // of products passing the top-level filters.
        FacetScope::Nested => Some(FacetDomain {
            exclude_tags: TOP_TAG.to_string(),
            filter: vec![
                format!(
                    "{{!filters param=$skuFilters excludeTags={} v=$sku}}",
                    facet.field
                ),
                CHILD_OF_FILTERED_PRODUCTS.to_string(),
            ],
        }),
    };

    TermsFacet {
        kind: "terms".to_string(),
        field: facet.field.clone(),
        limit: -1,
        domain,
        facet: BucketStats {
            product_count: PRODUCT_COUNT_STAT.to_string(),
        },
    }
}
