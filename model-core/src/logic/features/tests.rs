//! Integration Tests for the feature input modules
//!
//! Checks that layout, catalog, bulk parsing and summaries agree with each other.

#[cfg(test)]
mod integration_tests {
    use crate::logic::features::{
        catalog::{self, FeatureCategory},
        layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT},
        parse_bulk_input, summarize, CompletionStatus, FeatureSet, SAMPLE_CSV,
    };

    /// Every CSV slot lands on the catalog entry at the same position
    #[test]
    fn test_bulk_positions_match_catalog() {
        let features = parse_bulk_input(SAMPLE_CSV);

        for (i, (key, _)) in features.iter().enumerate() {
            assert_eq!(feature_index(key), Some(i));
            assert_eq!(catalog::FEATURE_CATALOG[i].key, key);
        }
    }

    /// Category counts of a summary follow the catalog
    #[test]
    fn test_summary_by_category_from_catalog() {
        let features: FeatureSet = catalog::by_category(FeatureCategory::Worst)
            .into_iter()
            .map(|spec| (spec.key, "1"))
            .collect();

        let summary = summarize(&features);
        assert_eq!(summary.worst_features, 10);
        assert_eq!(summary.mean_features, 0);
        assert_eq!(summary.status, CompletionStatus::Partial);
    }

    /// Feature sets built from the layout cover every key once
    #[test]
    fn test_full_layout_set() {
        let features: FeatureSet = FEATURE_LAYOUT.iter().map(|k| (*k, 0.0)).collect();
        assert_eq!(features.len(), FEATURE_COUNT);
        assert_eq!(summarize(&features).status, CompletionStatus::Complete);
    }
}
