use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::domain::{PredictionRequest, PredictionResult};
use super::engine::PredictionEngine;

/// Batch body. Fixtures stay untyped here so one bad entry cannot reject the whole batch.
#[derive(Debug, Deserialize)]
pub struct BatchPredictionRequest {
    pub fixtures: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchPredictionResponse {
    pub predictions: Vec<PredictionResult>,
    pub total: usize,
    pub model_version: String,
}

/// Router builder exposing single, batch and metadata endpoints.
pub fn prediction_router(engine: Arc<PredictionEngine>) -> Router {
    Router::new()
        .route("/api/predictions/predict", post(predict_handler))
        .route("/api/predictions/predict/batch", post(batch_handler))
        .route("/api/predictions/model/info", get(model_info_handler))
        .with_state(engine)
}

pub(crate) async fn predict_handler(
    State(engine): State<Arc<PredictionEngine>>,
    Json(request): Json<PredictionRequest>,
) -> Response {
    match engine.predict(&request) {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": format!("Prediction failed: {error}"),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn batch_handler(
    State(engine): State<Arc<PredictionEngine>>,
    Json(request): Json<BatchPredictionRequest>,
) -> Json<BatchPredictionResponse> {
    let outcome = engine.predict_batch(request.fixtures);
    Json(BatchPredictionResponse {
        total: outcome.total(),
        predictions: outcome.predictions,
        model_version: engine.model_version().to_string(),
    })
}

pub(crate) async fn model_info_handler(State(engine): State<Arc<PredictionEngine>>) -> Response {
    (StatusCode::OK, Json(engine.model_info())).into_response()
}
