use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use chrono::Utc;
use football_ai::prediction::{prediction_router, PredictionEngine};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

const SERVICE_NAME: &str = "ml-service";

pub(crate) fn with_prediction_routes(engine: Arc<PredictionEngine>) -> axum::Router {
    prediction_router(engine)
        .route("/", get(root))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(CorsLayer::permissive())
}

pub(crate) async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Football AI - ML Prediction Service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::Response;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app_state() -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    async fn read_json_body(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_service_and_timestamp() {
        let Json(body) = healthcheck().await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], SERVICE_NAME);
        let timestamp = body["timestamp"].as_str().expect("timestamp string");
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let state = app_state();

        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json_body(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn combined_router_serves_root_and_model_info() {
        let router = with_prediction_routes(Arc::new(PredictionEngine::default()))
            .layer(Extension(app_state()));

        let response = router
            .clone()
            .oneshot(
                axum::http::Request::get("/")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["message"], "Football AI - ML Prediction Service");

        let response = router
            .oneshot(
                axum::http::Request::get("/api/predictions/model/info")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["model_version"], "v1.0.0-poisson");
    }

    #[tokio::test]
    async fn cross_origin_requests_are_allowed() {
        let router = with_prediction_routes(Arc::new(PredictionEngine::default()))
            .layer(Extension(app_state()));

        let response = router
            .oneshot(
                axum::http::Request::get("/health")
                    .header(header::ORIGIN, "https://app.example.com")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn metrics_endpoint_is_plain_text() {
        let response = metrics_endpoint(Extension(app_state()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }
}
