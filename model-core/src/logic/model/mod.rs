//! Model Module - Prediction Engine
//!
//! Fixed-weight logistic regression over the 30 WDBC features.
//!
//! ## Structure
//! - `params`: ranges, weights, bias (immutable, optionally loaded from JSON)
//! - `inference`: `Classifier` - normalize, score, sigmoid, rank
//! - `threshold`: label threshold and risk bands
//! - `validate`: per-entry input checks
//! - `info`: static model metadata
//! - `types`: output records
//!
//! ## Usage
//! ```
//! use wdbc_core::logic::features::bulk::sample_features;
//! use wdbc_core::logic::model::{Classification, Classifier};
//!
//! let result = Classifier::shared().predict(&sample_features());
//! assert_eq!(result.prediction, Classification::Malignant);
//! ```

pub mod inference;
pub mod info;
pub mod params;
pub mod threshold;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests;

// Re-export common types
pub use inference::{sigmoid, Classifier, NormalizedFeatures};
pub use info::{ModelInfo, ModelMetrics};
pub use params::{FeatureRange, ModelParams, ParamsError};
pub use threshold::{RiskLevel, ThresholdConfig};
pub use types::{Classification, PredictionError, PredictionResult, TopFeature};
pub use validate::ValidationResult;
