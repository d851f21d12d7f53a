//! Prediction logic: feature input handling and the classifier itself.

pub mod features;
pub mod model;
