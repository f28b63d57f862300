use serde_json::Value;
use tracing::debug;

use super::config::EngineConfig;
use super::domain::{OutcomeProbabilities, PredictionRequest, PredictionResult, Side};
use super::factors::key_factors;
use super::form::form_score;
use super::goals::{apply_head_to_head, expected_goals};
use super::narrative;
use super::poisson::outcome_probabilities;
use super::strength::{attack_strength, defense_strength};

/// Confidence is the top probability as a percentage plus this offset, capped at 100.
const CONFIDENCE_OFFSET: f64 = 20.0;

/// Stateless predictor that applies the model configuration to a fixture.
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    config: EngineConfig,
}

impl PredictionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn model_version(&self) -> &str {
        &self.config.model_version
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError> {
        let home = &request.home_team;
        let away = &request.away_team;

        let home_attack = attack_strength(home);
        let home_defense = defense_strength(home);
        let away_attack = attack_strength(away);
        let away_defense = defense_strength(away);

        let home_form = form_score(home.last_five_form.as_deref());
        let away_form = form_score(away.last_five_form.as_deref());

        let home_xg = expected_goals(
            home_attack,
            away_defense,
            Side::Home,
            home_form,
            home.ranked_position(),
            &self.config,
        );
        let away_xg = expected_goals(
            away_attack,
            home_defense,
            Side::Away,
            away_form,
            away.ranked_position(),
            &self.config,
        );
        let (home_xg, away_xg) =
            apply_head_to_head(home_xg, away_xg, &request.head_to_head(), &self.config);

        for (side, rate) in [("home", home_xg), ("away", away_xg)] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(PredictionError::Computation {
                    fixture_id: request.fixture_id,
                    reason: format!("{side} expected goals {rate} is not a positive rate"),
                });
            }
        }

        let probabilities = outcome_probabilities(home_xg, away_xg);
        if !probabilities.is_finite() {
            return Err(PredictionError::Computation {
                fixture_id: request.fixture_id,
                reason: format!("no scoreline mass for rates {home_xg:.3} and {away_xg:.3}"),
            });
        }

        let confidence = confidence(&probabilities);
        let factors = key_factors(home, away, home_xg, away_xg, &self.config);
        let explanation =
            narrative::explanation(&probabilities, &home.name, &away.name, home_xg, away_xg);

        debug!(
            fixture_id = request.fixture_id,
            home_xg,
            away_xg,
            confidence,
            "fixture priced"
        );

        Ok(PredictionResult {
            fixture_id: request.fixture_id,
            home_win_prob: round_tenth(probabilities.home_win * 100.0),
            draw_prob: round_tenth(probabilities.draw * 100.0),
            away_win_prob: round_tenth(probabilities.away_win * 100.0),
            predicted_home_score: round_tenth(home_xg),
            predicted_away_score: round_tenth(away_xg),
            confidence: round_tenth(confidence),
            model_version: self.config.model_version.clone(),
            key_factors: narrative::render_factors(&factors),
            explanation,
        })
    }

    /// Decodes an untyped request payload and predicts it.
    pub fn predict_value(&self, payload: Value) -> Result<PredictionResult, PredictionError> {
        let fixture_id = payload.get("fixture_id").and_then(Value::as_u64);
        let request: PredictionRequest = serde_json::from_value(payload)
            .map_err(|source| PredictionError::Malformed { fixture_id, source })?;
        self.predict(&request)
    }
}

/// Confidence score in `[0, 100]`.
pub fn confidence(probabilities: &OutcomeProbabilities) -> f64 {
    (probabilities.max() * 100.0 + CONFIDENCE_OFFSET).min(100.0)
}

/// Rounds on the exact decimal value with ties to even, e.g. `1.25` becomes `1.2`.
fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Error raised when a fixture cannot be priced.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("malformed prediction request ({}): {source}", fixture_label(.fixture_id))]
    Malformed {
        fixture_id: Option<u64>,
        source: serde_json::Error,
    },
    #[error("computation failed for fixture {fixture_id}: {reason}")]
    Computation { fixture_id: u64, reason: String },
}

impl PredictionError {
    pub fn fixture_id(&self) -> Option<u64> {
        match self {
            PredictionError::Malformed { fixture_id, .. } => *fixture_id,
            PredictionError::Computation { fixture_id, .. } => Some(*fixture_id),
        }
    }
}

fn fixture_label(fixture_id: &Option<u64>) -> String {
    match fixture_id {
        Some(id) => format!("fixture {id}"),
        None => "unknown fixture".to_string(),
    }
}
