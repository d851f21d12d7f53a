//! WDBC Classifier HTTP Server
//!
//! Serves the breast-cancer classifier to form-style frontends: feature
//! catalog, input helpers, validation and prediction.
//!
//! # Routes
//!
//! ```text
//! GET  /health
//! GET  /api/v1/model
//! GET  /api/v1/features[?category=&importance=]
//! GET  /api/v1/features/categories
//! GET  /api/v1/features/:key
//! GET  /api/v1/sample
//! POST /api/v1/parse
//! POST /api/v1/summary
//! POST /api/v1/validate
//! POST /api/v1/predict
//! POST /api/v1/predict/bulk
//! ```

mod config;
mod models;
mod handlers;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wdbc_core::logic::model::{Classifier, ModelParams};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "wdbc_server=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("WDBC Classifier Server starting ({})...", config.environment);

    let classifier = match &config.model_params_path {
        Some(path) => {
            tracing::info!("Loading model parameters from {}", path.display());
            let params = ModelParams::from_json_file(path)
                .with_context(|| format!("loading model parameters from {}", path.display()))?;
            Classifier::new(params)
        }
        None => Classifier::shared().clone(),
    };

    if !config.strict_validation {
        tracing::warn!("Strict validation disabled; invalid values will be skipped");
    }

    // Build application state
    let state = AppState {
        classifier: Arc::new(classifier),
        config: config.clone(),
    };

    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let catalog_routes = Router::new()
        .route("/api/v1/features", get(handlers::features::list))
        .route("/api/v1/features/categories", get(handlers::features::categories))
        .route("/api/v1/features/:key", get(handlers::features::get))
        .route("/api/v1/sample", get(handlers::features::sample))
        .route("/api/v1/parse", post(handlers::features::parse))
        .route("/api/v1/summary", post(handlers::features::summary));

    let model_routes = Router::new()
        .route("/api/v1/model", get(handlers::model::info))
        .route("/api/v1/validate", post(handlers::predict::validate))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/predict/bulk", post(handlers::predict::predict_bulk));

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(catalog_routes)
        .merge(model_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState {
            classifier: Arc::new(Classifier::default()),
            config: config::Config::default(),
        })
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_model_info() {
        let (status, body) = get_json("/api/v1/model").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["features"], 30);
        assert_eq!(body["algorithm"], "Logistic Regression");
    }

    #[tokio::test]
    async fn test_feature_catalog_filters() {
        let (_, all) = get_json("/api/v1/features").await;
        assert_eq!(all.as_array().unwrap().len(), 30);

        let (_, se) = get_json("/api/v1/features?category=se").await;
        let se = se.as_array().unwrap();
        assert_eq!(se.len(), 10);
        assert!(se.iter().all(|f| f["key"].as_str().unwrap().starts_with("se_")));

        let (_, cats) = get_json("/api/v1/features/categories").await;
        assert_eq!(cats.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_feature_lookup() {
        let (status, body) = get_json("/api/v1/features/worst_area").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "worst");

        let (status, body) = get_json("/api/v1/features/patient_id").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Unknown feature: patient_id");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_sample_then_predict() {
        let (_, sample) = get_json("/api/v1/sample").await;
        assert_eq!(sample["features"]["mean_radius"], "13.54");

        let (status, body) = post_json("/api/v1/predict", sample["features"].clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["prediction"], "Malignant");
        assert_eq!(body["result"]["malignant_probability"], 0.9967);
        assert_eq!(body["result"]["risk_score"], 10);
        assert_eq!(body["risk_level"], "high");
        assert_eq!(body["metrics"]["completeness"], 100.0);
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_predict_bulk_matches_json() {
        let csv = wdbc_core::api::get_sample_data();
        let (status, body) = post_json("/api/v1/predict/bulk", json!({ "csv": csv })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["features_used"], 30);
        assert_eq!(body["result"]["top_features"][0]["feature"], "worst_concave_points");
    }

    #[tokio::test]
    async fn test_predict_rejects_invalid_values() {
        let (status, body) =
            post_json("/api/v1/predict", json!({ "mean_radius": "abc", "mean_texture": "14.36" })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Validation failed: Invalid numeric value for mean_radius: abc");
        assert_eq!(body["validation"]["invalid_features"], 1);
    }

    #[tokio::test]
    async fn test_predict_empty_is_error_result() {
        let (status, body) = post_json("/api/v1/predict", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["prediction"], "Error");
        assert_eq!(body["result"]["error"], "No features provided");
        assert!(body["metrics"].is_null());
    }

    #[tokio::test]
    async fn test_validate_and_summary() {
        let (status, body) = post_json("/api/v1/validate", json!({ "patient_id": "42" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_valid"], true);
        assert_eq!(body["warnings"][0], "Unknown feature: patient_id");

        let (_, body) = post_json("/api/v1/summary", json!({ "mean_radius": 13.54, "se_area": "" })).await;
        assert_eq!(body["entered_features"], 2);
        assert_eq!(body["status"], "insufficient");
    }

    #[tokio::test]
    async fn test_malformed_body_uses_error_body() {
        let (status, body) = send(
            Request::post("/api/v1/predict")
                .header("content-type", "application/json")
                .body(Body::from("{bad"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert!(body["error"].as_str().unwrap().starts_with("Failed to parse the request body as JSON"));

        let (status, body) = send(
            Request::post("/api/v1/summary").body(Body::from("{}")).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["status"], 415);

        let (status, body) = post_json("/api/v1/parse", json!({ "rows": [] })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status"], 422);
    }

    #[tokio::test]
    async fn test_parse_rejects_empty_csv() {
        let (status, body) = post_json("/api/v1/parse", json!({ "csv": "" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);

        let (status, body) = post_json("/api/v1/parse", json!({ "csv": "13.54, ,87.46" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "mean_radius": "13.54", "mean_perimeter": "87.46" }));
    }
}
