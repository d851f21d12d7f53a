//! Prediction Types
//!
//! Output records of the classifier. No scoring logic here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Diagnosis label, or the error sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Malignant,
    Benign,
    Error,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Malignant => "Malignant",
            Classification::Benign => "Benign",
            Classification::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Classification::Error)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Input problems that turn a prediction into an `Error` result
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    #[error("No features provided")]
    NoFeatures,

    #[error("No valid features could be normalized")]
    NothingNormalized,
}

// ============================================================================
// TOP FEATURES
// ============================================================================

/// One entry of the contribution ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopFeature {
    pub feature: String,
    /// |weight × normalized value|, 3 decimals
    pub importance: f64,
}

// ============================================================================
// PREDICTION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Classification,
    pub malignant_probability: f64,
    pub benign_probability: f64,
    pub confidence: f64,
    /// 0 - 10
    pub risk_score: u8,
    pub features_used: usize,
    pub total_features: usize,
    pub top_features: Vec<TopFeature>,
    pub model_version: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    /// Error sentinel: every score zeroed, message populated
    pub fn from_error(error: &PredictionError, total_features: usize, model_version: &str) -> Self {
        Self {
            prediction: Classification::Error,
            malignant_probability: 0.0,
            benign_probability: 0.0,
            confidence: 0.0,
            risk_score: 0,
            features_used: 0,
            total_features,
            top_features: Vec::new(),
            model_version: model_version.to_string(),
            timestamp: Utc::now(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.prediction.is_error()
    }
}

/// Round to `places` decimals
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
