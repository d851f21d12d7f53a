//! Commands - operations exposed to collaborators
//!
//! Thin wrappers over the shared `Classifier`, plus the full submission flow
//! (validate → predict → attach metrics) that form-style frontends run.

use serde::{Deserialize, Serialize};

use crate::logic::features::{
    self, catalog, FeatureCategory, FeatureSet, FeatureSpec, ImportanceTier, InputSummary,
};
use crate::logic::model::{
    Classifier, ModelInfo, ModelMetrics, PredictionResult, RiskLevel, ValidationResult,
};

// ============================================================================
// MODEL OPERATIONS
// ============================================================================

/// Score a submission with the built-in model
pub fn predict(features: &FeatureSet) -> PredictionResult {
    Classifier::shared().predict(features)
}

/// Validate a submission against the built-in ranges
pub fn validate_features(features: &FeatureSet) -> ValidationResult {
    Classifier::shared().validate_features(features)
}

/// Static metadata of the built-in model
pub fn get_model_info() -> ModelInfo {
    Classifier::shared().get_model_info()
}

// ============================================================================
// INPUT HELPERS
// ============================================================================

/// Catalog entries, optionally narrowed by category and importance
pub fn get_feature_catalog(
    category: Option<FeatureCategory>,
    importance: Option<ImportanceTier>,
) -> Vec<&'static FeatureSpec> {
    catalog::filtered(category, importance)
}

pub fn get_feature(key: &str) -> Option<&'static FeatureSpec> {
    catalog::by_key(key)
}

pub fn get_sample_data() -> &'static str {
    features::SAMPLE_CSV
}

pub fn parse_bulk_input(csv: &str) -> FeatureSet {
    features::parse_bulk_input(csv)
}

pub fn summarize_input(features: &FeatureSet) -> InputSummary {
    features::summarize(features)
}

// ============================================================================
// SUBMISSION FLOW
// ============================================================================

/// Everything a frontend shows after pressing "predict"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub result: PredictionResult,
    pub risk_level: RiskLevel,
    /// Absent when the prediction itself failed
    pub metrics: Option<ModelMetrics>,
    pub validation: ValidationResult,
}

/// Submission rejected before scoring
#[derive(Debug, Clone, thiserror::Error)]
#[error("Validation failed: {}", .validation.errors.join(", "))]
pub struct SubmissionRejected {
    pub validation: ValidationResult,
}

/// Validate, optionally reject on hard errors, then predict.
///
/// With `strict` unset, invalid entries are simply skipped by the model.
pub fn submit(
    classifier: &Classifier,
    features: &FeatureSet,
    strict: bool,
) -> Result<PredictionReport, SubmissionRejected> {
    let validation = classifier.validate_features(features);
    if strict && !validation.is_valid {
        log::info!("Submission rejected: {} invalid values", validation.errors.len());
        return Err(SubmissionRejected { validation });
    }

    let result = classifier.predict(features);
    let risk_level = classifier.thresholds().risk_level(result.risk_score);
    let metrics = (!result.is_error()).then(|| {
        ModelMetrics::new(&classifier.get_model_info(), result.features_used, result.total_features)
    });

    Ok(PredictionReport { result, risk_level, metrics, validation })
}
