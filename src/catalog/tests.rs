//! Catalog Module Tests
//!
//! Validates catalog construction rules and lookups.

#[cfg(test)]
mod tests {
    use crate::catalog::types::{FacetCatalog, FacetDefinition, FacetScope};
    use crate::error::Error;

    // ============================================================
    // STANDARD CATALOG
    // ============================================================

    #[test]
    fn test_standard_catalog_order() {
        let catalog = FacetCatalog::standard().unwrap();
        let names: Vec<&str> = catalog.iter().map(|f| f.display_name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Product Type",
                "Brand",
                "Color Family",
                "Operating System",
                "Storage Capacity"
            ]
        );
    }

    #[test]
    fn test_standard_catalog_goes_through_validation() {
        let catalog = FacetCatalog::standard().expect("standard catalog should validate");
        let facets: Vec<FacetDefinition> = catalog.iter().cloned().collect();

        // The same definitions fed back through `new` are accepted unchanged.
        let rebuilt = FacetCatalog::new(facets).unwrap();
        assert_eq!(rebuilt.len(), catalog.len());
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_standard_catalog_scopes() {
        let catalog = FacetCatalog::standard().unwrap();

        let top: Vec<&str> = catalog
            .iter()
            .filter(|f| f.scope == FacetScope::TopLevel)
            .map(|f| f.field.as_str())
            .collect();
        let nested: Vec<&str> = catalog
            .iter()
            .filter(|f| f.scope == FacetScope::Nested)
            .map(|f| f.field.as_str())
            .collect();

        assert_eq!(top, vec!["productType", "brand"]);
        assert_eq!(
            nested,
            vec!["colorFamily_s", "operatingSystem_s", "storageCapacity_s"]
        );
    }

    // ============================================================
    // VALIDATION
    // ============================================================

    #[test]
    fn test_duplicate_url_parameter_rejected() {
        let result = FacetCatalog::new(vec![
            FacetDefinition::top_level("Brand", "brand", "brands"),
            FacetDefinition::nested("Other Brand", "brand_s", "brands"),
        ]);

        match result {
            Err(Error::Catalog(msg)) => assert!(msg.contains("brands")),
            other => panic!("expected catalog error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_field_same_scope_rejected() {
        let result = FacetCatalog::new(vec![
            FacetDefinition::nested("Color", "colorFamily_s", "colors"),
            FacetDefinition::nested("Color Family", "colorFamily_s", "colorFamilies"),
        ]);

        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_same_field_different_scope_allowed() {
        let result = FacetCatalog::new(vec![
            FacetDefinition::top_level("Color", "color", "productColors"),
            FacetDefinition::nested("SKU Color", "color", "skuColors"),
        ]);

        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_catalog_allowed() {
        let catalog = FacetCatalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
    }

    // ============================================================
    // LOOKUPS
    // ============================================================

    #[test]
    fn test_lookup_by_display_name() {
        let catalog = FacetCatalog::standard().unwrap();

        let facet = catalog.by_display_name("Color Family").unwrap();
        assert_eq!(facet.url_parameter, "colorFamilies");
        assert_eq!(facet.field, "colorFamily_s");

        assert!(catalog.by_display_name("Sim Card Slots").is_none());
    }

    #[test]
    fn test_lookup_by_url_parameter() {
        let catalog = FacetCatalog::standard().unwrap();

        let facet = catalog.by_url_parameter("storageCapacities").unwrap();
        assert_eq!(facet.display_name, "Storage Capacity");
        assert_eq!(facet.scope, FacetScope::Nested);

        assert!(catalog.by_url_parameter("q").is_none());
    }
}
