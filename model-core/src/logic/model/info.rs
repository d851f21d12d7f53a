//! Static model metadata.
//!
//! The performance figures describe the offline evaluation of the trained
//! model; they are labels, not something computed from live input.

use serde::{Deserialize, Serialize};

use crate::logic::features::layout::{layout_hash, FEATURE_COUNT, FEATURE_VERSION};

use super::inference::Classifier;

pub const MODEL_NAME: &str = "Wisconsin Breast Cancer Classifier";
pub const MODEL_ALGORITHM: &str = "Logistic Regression";
pub const MODEL_DATASET: &str = "Wisconsin Diagnostic Breast Cancer (WDBC)";

pub const MODEL_ACCURACY: f64 = 0.94;
pub const MODEL_PRECISION: f64 = 0.91;
pub const MODEL_RECALL: f64 = 0.89;
pub const MODEL_F1_SCORE: f64 = 0.90;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub algorithm: String,
    pub features: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub dataset: String,
    pub version: String,
    pub bias: f64,
    pub layout_version: u8,
    pub layout_hash: u32,
}

impl Classifier {
    pub fn get_model_info(&self) -> ModelInfo {
        let params = self.params();
        ModelInfo {
            name: MODEL_NAME.to_string(),
            algorithm: MODEL_ALGORITHM.to_string(),
            features: params.weights.len(),
            accuracy: MODEL_ACCURACY,
            precision: MODEL_PRECISION,
            recall: MODEL_RECALL,
            f1_score: MODEL_F1_SCORE,
            dataset: MODEL_DATASET.to_string(),
            version: params.version.clone(),
            bias: params.bias,
            layout_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
        }
    }
}

/// Model metrics shown next to a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub features_used: usize,
    pub total_features: usize,
    pub model_accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    /// features_used out of 30, in percent
    pub completeness: f64,
}

impl ModelMetrics {
    pub fn new(info: &ModelInfo, features_used: usize, total_features: usize) -> Self {
        Self {
            features_used,
            total_features,
            model_accuracy: info.accuracy,
            precision: info.precision,
            recall: info.recall,
            f1_score: info.f1_score,
            completeness: features_used as f64 / FEATURE_COUNT as f64 * 100.0,
        }
    }
}
