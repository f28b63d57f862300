use rayon::prelude::*;
use serde_json::Value;
use tracing::warn;

use super::domain::{PredictionRequest, PredictionResult};
use super::engine::{PredictionEngine, PredictionError};

/// A fixture that was dropped from a batch.
#[derive(Debug)]
pub struct BatchFailure {
    /// Position of the fixture in the submitted batch.
    pub index: usize,
    pub fixture_id: Option<u64>,
    pub error: PredictionError,
}

/// Successful predictions in submission order, plus whatever was skipped.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub predictions: Vec<PredictionResult>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.predictions.len()
    }
}

impl PredictionEngine {
    /// Predicts untyped fixtures independently. A fixture that fails to decode or compute is
    /// logged and skipped without affecting the rest.
    pub fn predict_batch(&self, fixtures: Vec<Value>) -> BatchOutcome {
        let results: Vec<_> = fixtures
            .into_par_iter()
            .map(|payload| self.predict_value(payload))
            .collect();
        collect_outcome(results)
    }

    /// Typed counterpart of [`PredictionEngine::predict_batch`].
    pub fn predict_many(&self, requests: &[PredictionRequest]) -> BatchOutcome {
        let results: Vec<_> = requests
            .par_iter()
            .map(|request| self.predict(request))
            .collect();
        collect_outcome(results)
    }
}

fn collect_outcome(results: Vec<Result<PredictionResult, PredictionError>>) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(prediction) => outcome.predictions.push(prediction),
            Err(error) => {
                let fixture_id = error.fixture_id();
                warn!(index, ?fixture_id, %error, "skipping fixture that failed to predict");
                outcome.failures.push(BatchFailure {
                    index,
                    fixture_id,
                    error,
                });
            }
        }
    }
    outcome
}
