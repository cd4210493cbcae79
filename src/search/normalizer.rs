//! Response Normalizer
//!
//! Flattens a raw Solr query response into the API's product and facet lists.
//!
//! Validation is strict: the first missing or mistyped field aborts the whole
//! response with [`Error::MalformedResponse`], naming the field path. Engine
//! ordering of documents, facets and buckets is kept as-is.

use super::types::{FacetBucket, FacetResult, ResultRecord};
use crate::catalog::types::FacetCatalog;
use crate::error::{Error, Result};
use crate::solr::types::QueryResponse;

use serde_json::{Map, Value};

/// Facet key holding the domain's total match count, not a user-facing facet.
pub const RESERVED_COUNT_KEY: &str = "count";

pub fn normalize(
    catalog: &FacetCatalog,
    raw: &QueryResponse,
) -> Result<(Vec<ResultRecord>, Vec<FacetResult>)> {
    let facets = normalize_facets(catalog, &raw.facets)?;
    let products = raw
        .response
        .docs
        .iter()
        .enumerate()
        .map(|(i, doc)| normalize_doc(i, doc))
        .collect::<Result<Vec<_>>>()?;

    Ok((products, facets))
}

pub fn normalize_facets(
    catalog: &FacetCatalog,
    facets: &Map<String, Value>,
) -> Result<Vec<FacetResult>> {
    let mut results = Vec::with_capacity(facets.len());

    for (name, body) in facets {
        if name == RESERVED_COUNT_KEY {
            continue;
        }

        let path = format!("facets.{}", name);
        let body = body
            .as_object()
            .ok_or_else(|| Error::malformed(&path, "an object"))?;
        let buckets = body
            .get("buckets")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::malformed(format!("{}.buckets", path), "an array"))?;

        let buckets = buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| normalize_bucket(&format!("{}.buckets[{}]", path, i), bucket))
            .collect::<Result<Vec<_>>>()?;

        let param = catalog
            .by_display_name(name)
            .map(|facet| facet.url_parameter.clone())
            .unwrap_or_default();

        results.push(FacetResult {
            name: name.clone(),
            param,
            buckets,
        });
    }

    Ok(results)
}

fn normalize_bucket(path: &str, bucket: &Value) -> Result<FacetBucket> {
    let bucket = bucket
        .as_object()
        .ok_or_else(|| Error::malformed(path, "an object"))?;

    Ok(FacetBucket {
        val: string_field(bucket, path, "val")?,
        sku_count: count_field(bucket, path, "count")?,
        product_count: count_field(bucket, path, "productCount")?,
    })
}

fn normalize_doc(index: usize, doc: &Map<String, Value>) -> Result<ResultRecord> {
    let path = format!("response.docs[{}]", index);

    Ok(ResultRecord {
        id: string_field(doc, &path, "id")?,
        name: first_string(doc, &path, "name")?,
        category: first_string(doc, &path, "category")?,
        brand: first_string(doc, &path, "brand")?,
        product_type: string_field(doc, &path, "productType")?,
    })
}

fn string_field(obj: &Map<String, Value>, path: &str, key: &str) -> Result<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::malformed(format!("{}.{}", path, key), "a string"))
}

fn count_field(obj: &Map<String, Value>, path: &str, key: &str) -> Result<u64> {
    obj.get(key)
        .and_then(Value::as_f64)
        .filter(|n| *n >= 0.0)
        .map(|n| n as u64)
        .ok_or_else(|| Error::malformed(format!("{}.{}", path, key), "a non-negative number"))
}

/// Multi-valued stored fields are truncated to their first value.
fn first_string(obj: &Map<String, Value>, path: &str, key: &str) -> Result<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .and_then(|values| values.first())
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            Error::malformed(format!("{}.{}", path, key), "a non-empty array of strings")
        })
}
