//! WDBC breast cancer classifier
//!
//! A fixed-weight logistic regression over the 30 Wisconsin Diagnostic
//! Breast Cancer features. `logic` holds the feature handling and the model,
//! `api` the entry points used by the CLI and the HTTP service.

pub mod api;
pub mod constants;
pub mod logic;

pub use logic::features::{FeatureSet, FeatureValue};
pub use logic::model::{
    Classification, Classifier, ModelInfo, ModelParams, PredictionResult, ValidationResult,
};
