//! Model metadata handler

use axum::{extract::State, Json};
use wdbc_core::logic::model::ModelInfo;

use crate::AppState;

pub async fn info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.classifier.get_model_info())
}
