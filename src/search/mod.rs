//! Search Service Module
//!
//! Multi-select faceted search over the product/SKU block-join index.
//!
//! ## Pipeline
//! 1. **Selections**: facet URL parameters are parsed into a `SelectionSet`.
//! 2. **Builder**: the catalog and selections become a Solr JSON Request API payload
//!    (tagged filters, a block-join parent query and per-facet aggregations).
//! 3. **Engine**: the payload is posted to Solr through `SolrClient`.
//! 4. **Normalizer**: the nested facet/bucket response is validated and flattened
//!    into `ResultRecord`s and `FacetResult`s.
//!
//! ## Submodules
//! - **`builder`**: Pure query-payload assembly.
//! - **`normalizer`**: Strict response flattening.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Selections, engine payload and API response types.

pub mod builder;
pub mod handlers;
pub mod normalizer;
pub mod types;
