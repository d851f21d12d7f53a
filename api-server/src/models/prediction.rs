//! Prediction request/response models

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use wdbc_core::api::PredictionReport;
use wdbc_core::logic::features::{FeatureCategory, FeatureSet, ImportanceTier};

/// A pasted CSV row in layout order
#[derive(Debug, Deserialize, Validate)]
pub struct BulkInputRequest {
    #[validate(length(min = 1, message = "CSV input must not be empty"))]
    pub csv: String,
}

/// Query filters for the feature catalog
#[derive(Debug, Default, Deserialize)]
pub struct FeatureFilter {
    pub category: Option<FeatureCategory>,
    pub importance: Option<ImportanceTier>,
}

#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub csv: &'static str,
    pub features: FeatureSet,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub request_id: Uuid,
    #[serde(flatten)]
    pub report: PredictionReport,
}
