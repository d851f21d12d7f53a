//! Inference Engine - Logistic Regression
//!
//! normalize → weighted sum → sigmoid → label / confidence / risk,
//! plus a ranking of the features that pushed the score the most.
//!
//! Every operation is a pure function of its input and the immutable
//! `ModelParams`, so one `Classifier` can be shared across threads freely.

use chrono::Utc;
use once_cell::sync::Lazy;

use crate::logic::features::layout::{feature_index, FEATURE_LAYOUT};
use crate::logic::features::set::FeatureSet;

use super::params::ModelParams;
use super::threshold::{risk_score, ThresholdConfig};
use super::types::{round_to, PredictionError, PredictionResult, TopFeature};

/// Sigmoid input is clamped to ±this before exponentiation
pub const SIGMOID_CLAMP: f64 = 500.0;

/// Length of the contribution ranking
pub const TOP_FEATURE_COUNT: usize = 5;

// ============================================================================
// NORMALIZED FEATURES
// ============================================================================

/// Known, parseable features scaled into [0, 1], in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedFeatures {
    entries: Vec<(&'static str, f64)>,
}

impl NormalizedFeatures {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Fixed-weight logistic regression over the WDBC features
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    params: ModelParams,
    thresholds: ThresholdConfig,
}

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(Classifier::default);

impl Classifier {
    pub fn new(params: ModelParams) -> Self {
        Self { params, thresholds: ThresholdConfig::default() }
    }

    /// Shared instance over the built-in tables
    pub fn shared() -> &'static Classifier {
        &DEFAULT_CLASSIFIER
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Min-max scale every known, parseable value; skip everything else
    pub fn normalize(&self, features: &FeatureSet) -> NormalizedFeatures {
        let mut normalized = NormalizedFeatures::default();

        for (key, value) in features.iter() {
            let Some(index) = feature_index(key) else { continue };
            let Some(raw) = value.as_f64() else { continue };

            normalized.entries.push((FEATURE_LAYOUT[index], self.params.ranges[index].normalize(raw)));
        }

        normalized
    }

    /// bias + Σ weight × value; a feature without a weight adds nothing
    pub fn linear_score(&self, normalized: &NormalizedFeatures) -> f64 {
        normalized.iter().fold(self.params.bias, |acc, (key, value)| {
            match self.weight(key) {
                Some(w) if !value.is_nan() => acc + w * value,
                _ => acc,
            }
        })
    }

    /// |weight × value| per contributing feature, in input order
    pub fn calculate_feature_importance(&self, normalized: &NormalizedFeatures) -> Vec<(&'static str, f64)> {
        normalized
            .iter()
            .filter_map(|(key, value)| self.weight(key).map(|w| (key, (w * value).abs())))
            .collect()
    }

    /// Main prediction function. Never fails: bad input yields an `Error` result.
    pub fn predict(&self, features: &FeatureSet) -> PredictionResult {
        match self.try_predict(features) {
            Ok(result) => {
                log::debug!(
                    "Prediction: {} (p={:.4}, used {}/{})",
                    result.prediction,
                    result.malignant_probability,
                    result.features_used,
                    result.total_features
                );
                result
            }
            Err(e) => {
                log::warn!("Prediction error: {}", e);
                PredictionResult::from_error(&e, features.len(), &self.params.version)
            }
        }
    }

    fn try_predict(&self, features: &FeatureSet) -> Result<PredictionResult, PredictionError> {
        if features.is_empty() {
            return Err(PredictionError::NoFeatures);
        }

        let normalized = self.normalize(features);
        if normalized.is_empty() {
            return Err(PredictionError::NothingNormalized);
        }

        let logits = self.linear_score(&normalized);
        let malignant = sigmoid(logits);
        let benign = 1.0 - malignant;

        let prediction = self.thresholds.classify(malignant);
        let confidence = malignant.max(benign);

        let malignant_probability = round_to(malignant, 4);

        Ok(PredictionResult {
            prediction,
            malignant_probability,
            // Derived from the rounded value so the pair sums to exactly 1
            benign_probability: round_to(1.0 - malignant_probability, 4),
            confidence: round_to(confidence, 4),
            risk_score: risk_score(malignant_probability),
            features_used: normalized.len(),
            total_features: features.len(),
            top_features: self.top_features(&normalized),
            model_version: self.params.version.clone(),
            timestamp: Utc::now(),
            error: None,
        })
    }

    /// Highest non-zero importances, descending; ties keep input order
    pub fn top_features(&self, normalized: &NormalizedFeatures) -> Vec<TopFeature> {
        let mut importance: Vec<_> = self
            .calculate_feature_importance(normalized)
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .collect();

        importance.sort_by(|a, b| b.1.total_cmp(&a.1));

        importance
            .into_iter()
            .take(TOP_FEATURE_COUNT)
            .map(|(feature, score)| TopFeature { feature: feature.to_string(), importance: round_to(score, 3) })
            .collect()
    }

    fn weight(&self, key: &str) -> Option<f64> {
        self.params.weight(key).filter(|w| *w != 0.0)
    }
}

/// Logistic function with overflow guard
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x.clamp(-SIGMOID_CLAMP, SIGMOID_CLAMP)).exp())
}

// ============================================================================
// TESTS
// ============================================================================
