use super::config::EngineConfig;
use super::domain::{HeadToHead, Side};
use super::form::NEUTRAL_FORM;
use super::strength::LEAGUE_AVERAGE_GOALS;

pub const MIN_EXPECTED_GOALS: f64 = 0.3;
pub const MAX_EXPECTED_GOALS: f64 = 4.0;

/// Full form range maps onto a 40% band, i.e. at most 20% either way.
const FORM_SCALE: f64 = 0.4;

const TOP_POSITIONS: u32 = 4;
const RELEGATION_ZONE: u32 = 17;

/// Typical share of meetings won by the home and away side.
const H2H_HOME_BASELINE: f64 = 0.4;
const H2H_AWAY_BASELINE: f64 = 0.3;

/// Expected goals for one side, clamped to `[MIN_EXPECTED_GOALS, MAX_EXPECTED_GOALS]`.
pub fn expected_goals(
    attack: f64,
    opponent_defense: f64,
    venue: Side,
    form: f64,
    league_position: Option<u32>,
    config: &EngineConfig,
) -> f64 {
    let mut xg = LEAGUE_AVERAGE_GOALS * attack * opponent_defense;

    if venue == Side::Home {
        xg *= 1.0 + config.home_advantage;
    }

    xg *= 1.0 + (form - NEUTRAL_FORM) * FORM_SCALE;
    xg *= league_position_factor(league_position);

    xg.clamp(MIN_EXPECTED_GOALS, MAX_EXPECTED_GOALS)
}

fn league_position_factor(position: Option<u32>) -> f64 {
    match position {
        Some(position) if (1..=TOP_POSITIONS).contains(&position) => 1.1,
        Some(position) if position >= RELEGATION_ZONE => 0.9,
        _ => 1.0,
    }
}

/// Nudges both rates by how the sides have fared against each other.
///
/// Runs after the clamp in [`expected_goals`] and does not clamp again, so the adjusted rates
/// can fall slightly outside the clamp range.
pub fn apply_head_to_head(
    home_xg: f64,
    away_xg: f64,
    record: &HeadToHead,
    config: &EngineConfig,
) -> (f64, f64) {
    let total = record.total();
    if total == 0 {
        return (home_xg, away_xg);
    }

    let total = total as f64;
    let home_rate = f64::from(record.home_wins) / total;
    let away_rate = f64::from(record.away_wins) / total;

    (
        home_xg * (1.0 + (home_rate - H2H_HOME_BASELINE) * config.h2h_weight),
        away_xg * (1.0 + (away_rate - H2H_AWAY_BASELINE) * config.h2h_weight),
    )
}
