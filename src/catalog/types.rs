use crate::error::{Error, Result};
use std::collections::HashSet;

/// Whether a facet filters and aggregates over products or over their SKUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetScope {
    /// Field on the parent (product) document.
    TopLevel,
    /// Field on the nested child (SKU) documents.
    Nested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetDefinition {
    /// Solr field name.
    pub field: String,
    /// Label shown in the UI, also the facet key in the engine request/response.
    pub display_name: String,
    /// Query parameter holding the comma-separated selected values.
    pub url_parameter: String,
    pub scope: FacetScope,
}

impl FacetDefinition {
    pub fn top_level(display_name: &str, field: &str, url_parameter: &str) -> Self {
        Self {
            field: field.to_string(),
            display_name: display_name.to_string(),
            url_parameter: url_parameter.to_string(),
            scope: FacetScope::TopLevel,
        }
    }

    pub fn nested(display_name: &str, field: &str, url_parameter: &str) -> Self {
        Self {
            scope: FacetScope::Nested,
            ..Self::top_level(display_name, field, url_parameter)
        }
    }
}

/// Ordered, validated list of facet definitions.
#[derive(Debug, Clone)]
pub struct FacetCatalog {
    facets: Vec<FacetDefinition>,
}

impl FacetCatalog {
    /// Validates and wraps the given facets.
    ///
    /// # Errors
    /// * `Error::Catalog` if two facets share a `url_parameter`, or two facets
    ///   of the same scope share a `field`.
    pub fn new(facets: Vec<FacetDefinition>) -> Result<Self> {
        let mut params = HashSet::new();
        let mut fields = HashSet::new();

        for facet in &facets {
            if !params.insert(facet.url_parameter.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate url parameter '{}'",
                    facet.url_parameter
                )));
            }
            if !fields.insert((facet.scope, facet.field.as_str())) {
                return Err(Error::Catalog(format!(
                    "duplicate field '{}' in {:?} scope",
                    facet.field, facet.scope
                )));
            }
        }

        Ok(Self { facets })
    }

    /// The product/SKU catalog served by the API, validated like any other.
    pub fn standard() -> Result<Self> {
        Self::new(vec![
            FacetDefinition::top_level("Product Type", "productType", "productTypes"),
            FacetDefinition::top_level("Brand", "brand", "brands"),
            FacetDefinition::nested("Color Family", "colorFamily_s", "colorFamilies"),
            FacetDefinition::nested("Operating System", "operatingSystem_s", "operatingSystems"),
            FacetDefinition::nested("Storage Capacity", "storageCapacity_s", "storageCapacities"),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacetDefinition> {
        self.facets.iter()
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Reverse lookup used when flattening engine facets back to URL parameters.
    pub fn by_display_name(&self, display_name: &str) -> Option<&FacetDefinition> {
        self.facets.iter().find(|f| f.display_name == display_name)
    }

    pub fn by_url_parameter(&self, url_parameter: &str) -> Option<&FacetDefinition> {
        self.facets.iter().find(|f| f.url_parameter == url_parameter)
    }
}
