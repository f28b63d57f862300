use football_ai::error::AppError;
use football_ai::prediction::PredictionError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads a JSON file holding either one request object or an array of them.
pub(crate) fn read_request_file(path: &Path) -> Result<Vec<Value>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_request_document(&raw)
}

pub(crate) fn parse_request_document(raw: &str) -> Result<Vec<Value>, AppError> {
    let document: Value = serde_json::from_str(raw).map_err(|source| {
        AppError::Prediction(PredictionError::Malformed {
            fixture_id: None,
            source,
        })
    })?;

    Ok(match document {
        Value::Array(fixtures) => fixtures,
        single => vec![single],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_request_becomes_one_fixture() {
        let fixtures = parse_request_document(r#"{"fixture_id": 4}"#).expect("valid json");
        assert_eq!(fixtures.len(), 1);
    }

    #[test]
    fn arrays_are_kept_in_order() {
        let fixtures =
            parse_request_document(r#"[{"fixture_id": 4}, {"fixture_id": 9}]"#).expect("valid json");
        assert_eq!(fixtures[1]["fixture_id"], 9);
    }

    #[test]
    fn invalid_json_is_a_prediction_error() {
        let error = parse_request_document("{ nope").expect_err("invalid json");
        assert!(matches!(error, AppError::Prediction(_)));
    }
}
