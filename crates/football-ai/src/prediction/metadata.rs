use serde::{Deserialize, Serialize};

use super::engine::PredictionEngine;

pub const MODEL_TYPE: &str = "XGBoost + Poisson";
pub const FEATURES_COUNT: u32 = 50;
pub const TRAINED_ON: &str = "Historical match data";

/// Published benchmark figures. Static, not measured at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Win/draw/loss hit rate.
    pub match_result: f64,
    /// Mean absolute error of the predicted score.
    pub score_mae: f64,
    /// Over/under 2.5 goals hit rate.
    pub over_under_2_5: f64,
}

pub const PUBLISHED_ACCURACY: AccuracyMetrics = AccuracyMetrics {
    match_result: 0.52,
    score_mae: 0.8,
    over_under_2_5: 0.58,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_version: String,
    pub model_type: String,
    pub features_count: u32,
    pub trained_on: String,
    pub accuracy: AccuracyMetrics,
}

impl PredictionEngine {
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_version: self.model_version().to_string(),
            model_type: MODEL_TYPE.to_string(),
            features_count: FEATURES_COUNT,
            trained_on: TRAINED_ON.to_string(),
            accuracy: PUBLISHED_ACCURACY,
        }
    }
}
