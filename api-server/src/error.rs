//! Error handling

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use wdbc_core::api::SubmissionRejected;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    Rejected(#[from] SubmissionRejected),

    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Rejected(rejected) => (StatusCode::UNPROCESSABLE_ENTITY, rejected.to_string()),
            AppError::InvalidBody { status, message } => (*status, message.clone()),
        };

        let mut body = json!({
            "error": error_message,
            "status": status.as_u16()
        });

        if let AppError::Rejected(rejected) = &self {
            body["validation"] = json!(rejected.validation);
        }

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// `Json` extractor whose rejections use the `{error, status}` body
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
