use serde::{Deserialize, Serialize};

pub const MODEL_VERSION: &str = "v1.0.0-poisson";

/// Tunable constants of the analytical model. Fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fractional boost to the home side's expected goals.
    pub home_advantage: f64,
    pub form_weight: f64,
    pub h2h_weight: f64,
    pub league_position_weight: f64,
    pub model_version: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            home_advantage: 0.25,
            form_weight: 0.3,
            h2h_weight: 0.2,
            league_position_weight: 0.15,
            model_version: MODEL_VERSION.to_string(),
        }
    }
}

impl EngineConfig {
    /// Home advantage as a whole percentage, truncated.
    pub fn home_advantage_percent(&self) -> i64 {
        (self.home_advantage * 100.0) as i64
    }
}
