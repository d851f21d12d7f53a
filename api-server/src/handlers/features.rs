//! Feature catalog and input helper handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;
use wdbc_core::api;
use wdbc_core::logic::features::{catalog, FeatureSet, FeatureSpec, InputSummary};

use crate::error::{AppError, AppJson, AppResult};
use crate::models::{BulkInputRequest, FeatureFilter, SampleResponse};
use crate::AppState;

/// GET /api/v1/features
pub async fn list(Query(filter): Query<FeatureFilter>) -> Json<Vec<&'static FeatureSpec>> {
    Json(api::get_feature_catalog(filter.category, filter.importance))
}

/// GET /api/v1/features/categories
pub async fn categories() -> Json<Vec<catalog::CategorySummary>> {
    Json(catalog::category_summaries())
}

/// GET /api/v1/features/:key
pub async fn get(Path(key): Path<String>) -> AppResult<Json<&'static FeatureSpec>> {
    api::get_feature(&key)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown feature: {}", key)))
}

/// GET /api/v1/sample
pub async fn sample() -> Json<SampleResponse> {
    let csv = api::get_sample_data();
    Json(SampleResponse {
        csv,
        features: api::parse_bulk_input(csv),
    })
}

/// POST /api/v1/parse
pub async fn parse(
    State(state): State<AppState>,
    AppJson(req): AppJson<BulkInputRequest>,
) -> AppResult<Json<FeatureSet>> {
    check_bulk_input(&state, &req)?;
    Ok(Json(api::parse_bulk_input(&req.csv)))
}

/// POST /api/v1/summary
pub async fn summary(AppJson(features): AppJson<FeatureSet>) -> Json<InputSummary> {
    Json(api::summarize_input(&features))
}

pub(crate) fn check_bulk_input(state: &AppState, req: &BulkInputRequest) -> AppResult<()> {
    req.validate()?;

    let max = state.config.max_bulk_input_len;
    if req.csv.len() > max {
        return Err(AppError::ValidationError(format!(
            "CSV input exceeds {} characters",
            max
        )));
    }
    Ok(())
}
