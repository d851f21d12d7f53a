//! Bulk CSV input
//!
//! A single line of comma-separated values mapped positionally onto
//! `FEATURE_LAYOUT`. Blank slots stay unset, values past the 30th are dropped.

use super::layout::FEATURE_LAYOUT;
use super::set::FeatureSet;

/// Canonical WDBC sample row
pub const SAMPLE_CSV: &str = "13.54,14.36,87.46,566.3,0.09779,0.08129,0.06664,0.04781,0.1885,0.05766,0.2699,0.7886,2.058,23.56,0.008462,0.0146,0.02387,0.01315,0.0198,0.0023,15.11,19.26,99.7,711.2,0.144,0.1773,0.239,0.1288,0.2977,0.07259";

/// Map a CSV line onto feature keys.
///
/// Values are trimmed and kept as text; whether they are numeric is a
/// validation concern.
pub fn parse_bulk_input(csv: &str) -> FeatureSet {
    let mut features = FeatureSet::new();

    for (key, raw) in FEATURE_LAYOUT.iter().zip(csv.split(',')) {
        let value = raw.trim();
        if !value.is_empty() {
            features.insert(*key, value);
        }
    }

    log::debug!("Parsed bulk input into {} features", features.len());
    features
}

/// The sample row as a feature set
pub fn sample_features() -> FeatureSet {
    parse_bulk_input(SAMPLE_CSV)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::set::FeatureValue;
    use crate::logic::features::FEATURE_COUNT;

    #[test]
    fn test_sample_maps_all_features() {
        let features = sample_features();
        assert_eq!(features.len(), FEATURE_COUNT);
        assert_eq!(features.get("mean_radius"), Some(&FeatureValue::Text("13.54".into())));
        assert_eq!(
            features.get("worst_fractal_dimension"),
            Some(&FeatureValue::Text("0.07259".into()))
        );
    }

    #[test]
    fn test_short_input_leaves_trailing_unset() {
        let features = parse_bulk_input(" 13.54 , 14.36,87.46");
        assert_eq!(features.len(), 3);
        assert_eq!(features.get("mean_texture"), Some(&FeatureValue::Text("14.36".into())));
        assert!(features.get("mean_area").is_none());
    }

    #[test]
    fn test_blank_slots_are_skipped() {
        let features = parse_bulk_input("13.54,,87.46, ,566.3");
        let keys: Vec<_> = features.keys().collect();
        assert_eq!(keys, vec!["mean_radius", "mean_perimeter", "mean_area"]);
    }

    #[test]
    fn test_extra_values_are_ignored() {
        let csv = format!("{},1,2,3", SAMPLE_CSV);
        assert_eq!(parse_bulk_input(&csv).len(), FEATURE_COUNT);
    }

    #[test]
    fn test_non_numeric_text_is_kept() {
        let features = parse_bulk_input("abc,1");
        assert_eq!(features.get("mean_radius"), Some(&FeatureValue::Text("abc".into())));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_bulk_input("").is_empty());
    }
}
