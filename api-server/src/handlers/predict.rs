//! Validation and prediction handlers

use axum::{extract::State, Json};
use uuid::Uuid;
use wdbc_core::api;
use wdbc_core::logic::features::FeatureSet;
use wdbc_core::logic::model::ValidationResult;

use crate::error::{AppJson, AppResult};
use crate::handlers::features::check_bulk_input;
use crate::models::{BulkInputRequest, PredictResponse};
use crate::AppState;

/// POST /api/v1/validate
pub async fn validate(
    State(state): State<AppState>,
    AppJson(features): AppJson<FeatureSet>,
) -> Json<ValidationResult> {
    Json(state.classifier.validate_features(&features))
}

/// POST /api/v1/predict
pub async fn predict(
    State(state): State<AppState>,
    AppJson(features): AppJson<FeatureSet>,
) -> AppResult<Json<PredictResponse>> {
    submit(&state, &features)
}

/// POST /api/v1/predict/bulk
pub async fn predict_bulk(
    State(state): State<AppState>,
    AppJson(req): AppJson<BulkInputRequest>,
) -> AppResult<Json<PredictResponse>> {
    check_bulk_input(&state, &req)?;
    submit(&state, &api::parse_bulk_input(&req.csv))
}

fn submit(state: &AppState, features: &FeatureSet) -> AppResult<Json<PredictResponse>> {
    let request_id = Uuid::new_v4();
    tracing::debug!(%request_id, entries = features.len(), "Prediction requested");

    let report = match api::submit(&state.classifier, features, state.config.strict_validation) {
        Ok(report) => report,
        Err(rejected) => {
            tracing::info!(%request_id, errors = rejected.validation.errors.len(), "Submission rejected");
            return Err(rejected.into());
        }
    };

    let result = &report.result;
    if let Some(error) = &result.error {
        tracing::warn!(%request_id, "Prediction failed: {}", error);
    } else {
        tracing::info!(
            %request_id,
            prediction = %result.prediction,
            probability = result.malignant_probability,
            features_used = result.features_used,
            "Prediction complete"
        );
    }

    Ok(Json(PredictResponse { request_id, report }))
}
