//! End-to-end tests for the prediction engine
//!
//! Pinned regression fixture for the canonical sample row plus property
//! tests for the numeric invariants.

#[cfg(test)]
mod integration_tests {
    use proptest::prelude::*;

    use crate::logic::features::bulk::{parse_bulk_input, sample_features};
    use crate::logic::features::layout::FEATURE_LAYOUT;
    use crate::logic::features::set::FeatureSet;
    use crate::logic::model::{sigmoid, Classification, Classifier, RiskLevel};

    /// Sample row: logits ≈ 5.7118
    #[test]
    fn test_sample_row_regression() {
        let classifier = Classifier::default();
        let result = classifier.predict(&sample_features());

        assert_eq!(result.prediction, Classification::Malignant);
        assert_eq!(result.malignant_probability, 0.9967);
        assert_eq!(result.benign_probability, 0.0033);
        assert_eq!(result.confidence, 0.9967);
        assert_eq!(result.risk_score, 10);
        assert_eq!(result.features_used, 30);
        assert_eq!(result.total_features, 30);
        assert_eq!(result.model_version, "1.0.0");
        assert!(result.error.is_none());

        let logits = classifier.linear_score(&classifier.normalize(&sample_features()));
        assert!((logits - 5.711828).abs() < 1e-5, "logits = {}", logits);

        assert_eq!(classifier.thresholds().risk_level(result.risk_score), RiskLevel::High);
    }

    #[test]
    fn test_sample_row_top_features() {
        let result = Classifier::default().predict(&sample_features());

        let ranked: Vec<_> = result
            .top_features
            .iter()
            .map(|t| (t.feature.as_str(), t.importance))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("worst_concave_points", 2.169),
                ("mean_concave_points", 1.378),
                ("mean_radius", 0.869),
                ("worst_radius", 0.868),
                ("se_concave_points", 0.772),
            ]
        );
    }

    #[test]
    fn test_json_and_csv_input_agree() {
        let json = format!(
            "{{{}}}",
            FEATURE_LAYOUT
                .iter()
                .zip(crate::logic::features::bulk::SAMPLE_CSV.split(','))
                .map(|(k, v)| format!("\"{}\": {}", k, v))
                .collect::<Vec<_>>()
                .join(",")
        );
        let from_json: FeatureSet = serde_json::from_str(&json).unwrap();

        let classifier = Classifier::default();
        let a = classifier.predict(&from_json);
        let b = classifier.predict(&sample_features());
        assert_eq!(a.malignant_probability, b.malignant_probability);
        assert_eq!(a.top_features, b.top_features);
    }

    #[test]
    fn test_partial_row_uses_fewer_features() {
        let features = parse_bulk_input("13.54,14.36,87.46,566.3,0.09779");
        let result = Classifier::default().predict(&features);

        assert!(!result.is_error());
        assert_eq!(result.features_used, 5);
        assert_eq!(result.total_features, 5);
    }

    #[test]
    fn test_unknown_keys_counted_in_total_only() {
        let features = sample_features().with("patient_id", "42");
        let result = Classifier::default().predict(&features);

        assert_eq!(result.features_used, 30);
        assert_eq!(result.total_features, 31);
    }

    #[test]
    fn test_empty_prediction_is_error() {
        let result = Classifier::shared().predict(&FeatureSet::new());
        assert_eq!(result.prediction, Classification::Error);
        assert_eq!(result.features_used, 0);
    }

    fn arb_features() -> impl Strategy<Value = FeatureSet> {
        proptest::collection::vec((0..FEATURE_LAYOUT.len(), -1e4f64..1e4f64), 1..40).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(i, v)| (FEATURE_LAYOUT[i], v))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_probabilities_sum_to_one(features in arb_features()) {
            let result = Classifier::default().predict(&features);
            prop_assert!(!result.is_error());
            prop_assert!((result.malignant_probability + result.benign_probability - 1.0).abs() < 1e-6);
        }

        #[test]
        fn prop_risk_score_tracks_probability(features in arb_features()) {
            let result = Classifier::default().predict(&features);

            prop_assert!(result.risk_score <= 10);
            prop_assert_eq!(result.risk_score as f64, (result.malignant_probability * 10.0).round());
        }

        #[test]
        fn prop_normalized_within_unit_interval(features in arb_features()) {
            let normalized = Classifier::default().normalize(&features);
            for (_, value) in normalized.iter() {
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }

        #[test]
        fn prop_confidence_is_larger_side(features in arb_features()) {
            let result = Classifier::default().predict(&features);
            prop_assert!(result.confidence >= 0.5);
            let larger = result.malignant_probability.max(result.benign_probability);
            prop_assert!((result.confidence - larger).abs() <= 1e-4 + 1e-12);
        }

        #[test]
        fn prop_top_features_sorted_and_bounded(features in arb_features()) {
            let classifier = Classifier::default();
            let result = classifier.predict(&features);
            let nonzero = classifier
                .calculate_feature_importance(&classifier.normalize(&features))
                .iter()
                .filter(|(_, s)| *s > 0.0)
                .count();

            prop_assert_eq!(result.top_features.len(), nonzero.min(5));
            for pair in result.top_features.windows(2) {
                prop_assert!(pair[0].importance >= pair[1].importance);
            }
        }

        #[test]
        fn prop_sigmoid_strictly_increasing(a in -30.0f64..30.0, delta in 1e-3f64..10.0) {
            prop_assert!(sigmoid(a) < sigmoid(a + delta));
        }

        #[test]
        fn prop_sigmoid_never_overflows(x in proptest::num::f64::NORMAL) {
            let y = sigmoid(x);
            prop_assert!(y.is_finite());
            prop_assert!((0.0..=1.0).contains(&y));
        }
    }
}
