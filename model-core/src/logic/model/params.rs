//! Model Parameters
//!
//! Min-max ranges, logistic weights and bias of the WDBC classifier.
//! Tables are indexed by `FEATURE_LAYOUT` position. The defaults are the
//! offline-trained values; a JSON file can replace them at startup.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MODEL_VERSION;
use crate::logic::features::layout::{
    feature_index, validate_layout, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT,
};

// ============================================================================
// FEATURE RANGE
// ============================================================================

/// Normalization domain of one feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Min-max scale into [0, 1]
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.min) / self.span()).clamp(0.0, 1.0)
    }

    /// Band ten times wider than the trained range on each side
    pub fn is_typical(&self, value: f64) -> bool {
        value >= self.min * 0.1 && value <= self.max * 10.0
    }
}

// ============================================================================
// DEFAULT TABLES (WDBC)
// ============================================================================

pub const DEFAULT_BIAS: f64 = -2.3;

pub const DEFAULT_RANGES: [FeatureRange; FEATURE_COUNT] = [
    FeatureRange::new(6.981, 28.11),
    FeatureRange::new(9.71, 39.28),
    FeatureRange::new(43.79, 188.5),
    FeatureRange::new(143.5, 2501.0),
    FeatureRange::new(0.05263, 0.1634),
    FeatureRange::new(0.01938, 0.3454),
    FeatureRange::new(0.0, 0.4268),
    FeatureRange::new(0.0, 0.2012),
    FeatureRange::new(0.106, 0.304),
    FeatureRange::new(0.04996, 0.09744),
    FeatureRange::new(0.1115, 2.873),
    FeatureRange::new(0.3602, 4.885),
    FeatureRange::new(0.757, 21.98),
    FeatureRange::new(6.802, 542.2),
    FeatureRange::new(0.001713, 0.03113),
    FeatureRange::new(0.002252, 0.1354),
    FeatureRange::new(0.0, 0.396),
    FeatureRange::new(0.0, 0.05279),
    FeatureRange::new(0.007882, 0.07895),
    FeatureRange::new(0.0008948, 0.02984),
    FeatureRange::new(7.93, 36.04),
    FeatureRange::new(12.02, 49.54),
    FeatureRange::new(50.41, 251.2),
    FeatureRange::new(185.2, 4254.0),
    FeatureRange::new(0.07117, 0.2226),
    FeatureRange::new(0.02729, 1.058),
    FeatureRange::new(0.0, 1.252),
    FeatureRange::new(0.0, 0.291),
    FeatureRange::new(0.1565, 0.6638),
    FeatureRange::new(0.05504, 0.2075),
];

pub const DEFAULT_WEIGHTS: [f64; FEATURE_COUNT] = [
    2.8, 0.4, 1.9, 1.2, -1.8, 3.1, 4.2, 5.8, -0.7, -2.1, // mean
    1.5, 0.3, 1.1, 0.8, -0.9, 1.7, 2.3, 3.1, -0.4, -1.2, // se
    3.4, 0.6, 2.1, 1.5, -1.2, 2.8, 3.9, 4.9, -0.5, -1.8, // worst
];

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("Failed to read model parameters: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid model parameter file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing parameters for feature: {0}")]
    MissingFeature(String),

    #[error("Unknown feature in parameter file: {0}")]
    UnknownFeature(String),

    #[error("Invalid range for {key}: min {min} must be below max {max}")]
    InvalidRange { key: String, min: f64, max: f64 },

    #[error("Non-finite parameter: {0}")]
    NonFinite(String),

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),
}

// ============================================================================
// MODEL PARAMS
// ============================================================================

/// Immutable parameter tables
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    pub version: String,
    pub bias: f64,
    pub ranges: [FeatureRange; FEATURE_COUNT],
    pub weights: [f64; FEATURE_COUNT],
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            version: MODEL_VERSION.to_string(),
            bias: DEFAULT_BIAS,
            ranges: DEFAULT_RANGES,
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl ModelParams {
    pub fn range(&self, key: &str) -> Option<&FeatureRange> {
        feature_index(key).map(|i| &self.ranges[i])
    }

    pub fn weight(&self, key: &str) -> Option<f64> {
        feature_index(key).map(|i| self.weights[i])
    }

    /// Load parameters from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        log::info!("Loading model parameters from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ParamsError> {
        let file: ParamsFile = serde_json::from_str(content)?;
        file.try_into()
    }

    /// Serializable form, keyed by feature
    pub fn to_file(&self) -> ParamsFile {
        let features = FEATURE_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let range = self.ranges[i];
                (key.to_string(), FeatureParams { min: range.min, max: range.max, weight: self.weights[i] })
            })
            .collect();

        ParamsFile {
            version: Some(self.version.clone()),
            layout_version: None,
            layout_hash: None,
            bias: self.bias,
            features,
        }
    }
}

// ============================================================================
// FILE FORMAT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureParams {
    pub min: f64,
    pub max: f64,
    pub weight: f64,
}

/// On-disk parameter format
///
/// ```json
/// { "version": "1.0.0", "bias": -2.3,
///   "features": { "mean_radius": { "min": 6.981, "max": 28.11, "weight": 2.8 }, ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_version: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_hash: Option<u32>,
    pub bias: f64,
    pub features: BTreeMap<String, FeatureParams>,
}

impl TryFrom<ParamsFile> for ModelParams {
    type Error = ParamsError;

    fn try_from(file: ParamsFile) -> Result<Self, Self::Error> {
        if let (Some(version), Some(hash)) = (file.layout_version, file.layout_hash) {
            validate_layout(version, hash)?;
        }

        if !file.bias.is_finite() {
            return Err(ParamsError::NonFinite("bias".to_string()));
        }

        if let Some(unknown) = file.features.keys().find(|k| feature_index(k).is_none()) {
            return Err(ParamsError::UnknownFeature(unknown.clone()));
        }

        let mut ranges = DEFAULT_RANGES;
        let mut weights = DEFAULT_WEIGHTS;

        for (i, key) in FEATURE_LAYOUT.iter().enumerate() {
            let p = file
                .features
                .get(*key)
                .ok_or_else(|| ParamsError::MissingFeature(key.to_string()))?;

            if !(p.min.is_finite() && p.max.is_finite() && p.weight.is_finite()) {
                return Err(ParamsError::NonFinite(key.to_string()));
            }
            if p.min >= p.max {
                return Err(ParamsError::InvalidRange { key: key.to_string(), min: p.min, max: p.max });
            }

            ranges[i] = FeatureRange::new(p.min, p.max);
            weights[i] = p.weight;
        }

        Ok(ModelParams {
            version: file.version.unwrap_or_else(|| MODEL_VERSION.to_string()),
            bias: file.bias,
            ranges,
            weights,
        })
    }
}
