use serde::Serialize;

use super::config::EngineConfig;
use super::domain::{Side, TeamStats};
use super::form::form_score;

pub const MAX_KEY_FACTORS: usize = 5;

const FORM_GAP: f64 = 0.2;
const HIGH_HOME_XG: f64 = 1.8;
const HIGH_AWAY_XG: f64 = 1.5;
const LEAKY_DEFENSE_CONCEDED: f64 = 1.8;
const POSITION_GAP: u32 = 8;

/// A reason that contributed to a prediction, independent of how it is worded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyFactor {
    BetterForm { side: Side },
    HomeAdvantage { percent: i64 },
    HighExpectedGoals { side: Side, expected_goals: f64 },
    WeakAwayDefense { conceded_per_game: f64 },
    LeaguePositionGap { leader: Side, places: u32 },
}

/// Evaluates the factor rules in their fixed order and keeps the first [`MAX_KEY_FACTORS`].
pub fn key_factors(
    home: &TeamStats,
    away: &TeamStats,
    home_xg: f64,
    away_xg: f64,
    config: &EngineConfig,
) -> Vec<KeyFactor> {
    let mut factors = Vec::new();

    let home_form = form_score(home.last_five_form.as_deref());
    let away_form = form_score(away.last_five_form.as_deref());
    if home_form > away_form + FORM_GAP {
        factors.push(KeyFactor::BetterForm { side: Side::Home });
    } else if away_form > home_form + FORM_GAP {
        factors.push(KeyFactor::BetterForm { side: Side::Away });
    }

    factors.push(KeyFactor::HomeAdvantage {
        percent: config.home_advantage_percent(),
    });

    if home_xg > HIGH_HOME_XG {
        factors.push(KeyFactor::HighExpectedGoals {
            side: Side::Home,
            expected_goals: home_xg,
        });
    }
    if away_xg > HIGH_AWAY_XG {
        factors.push(KeyFactor::HighExpectedGoals {
            side: Side::Away,
            expected_goals: away_xg,
        });
    }

    if let Some(conceded) = away.goals_conceded_per_game() {
        if conceded > LEAKY_DEFENSE_CONCEDED {
            factors.push(KeyFactor::WeakAwayDefense {
                conceded_per_game: conceded,
            });
        }
    }

    if let (Some(home_position), Some(away_position)) =
        (home.ranked_position(), away.ranked_position())
    {
        let gap = i64::from(away_position) - i64::from(home_position);
        if gap > i64::from(POSITION_GAP) {
            factors.push(KeyFactor::LeaguePositionGap {
                leader: Side::Home,
                places: gap.unsigned_abs() as u32,
            });
        } else if gap < -i64::from(POSITION_GAP) {
            factors.push(KeyFactor::LeaguePositionGap {
                leader: Side::Away,
                places: gap.unsigned_abs() as u32,
            });
        }
    }

    factors.truncate(MAX_KEY_FACTORS);
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(form: Option<&str>, played: u32, against: u32, position: Option<u32>) -> TeamStats {
        TeamStats {
            team_id: 3,
            name: "Samsun".to_string(),
            matches_played: played,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: against,
            home_wins: 0,
            away_wins: 0,
            last_five_form: form.map(str::to_string),
            league_position: position,
        }
    }

    #[test]
    fn home_advantage_is_always_listed() {
        let config = EngineConfig::default();
        let side = team(None, 0, 0, None);
        let factors = key_factors(&side, &side, 1.0, 1.0, &config);
        assert_eq!(factors, vec![KeyFactor::HomeAdvantage { percent: 25 }]);
    }

    #[test]
    fn form_gap_must_exceed_threshold() {
        let config = EngineConfig::default();
        let home = team(Some("WWDLL"), 0, 0, None);
        let away = team(Some("LLLLL"), 0, 0, None);
        let factors = key_factors(&home, &away, 1.0, 1.0, &config);
        assert_eq!(factors[0], KeyFactor::BetterForm { side: Side::Home });

        let level = team(Some("DDDDD"), 0, 0, None);
        let factors = key_factors(&level, &level, 1.0, 1.0, &config);
        assert!(!factors
            .iter()
            .any(|factor| matches!(factor, KeyFactor::BetterForm { .. })));
    }

    #[test]
    fn away_side_can_lead_the_table() {
        let config = EngineConfig::default();
        let home = team(None, 0, 0, Some(15));
        let away = team(None, 0, 0, Some(2));
        let factors = key_factors(&home, &away, 1.0, 1.0, &config);
        assert_eq!(
            factors.last(),
            Some(&KeyFactor::LeaguePositionGap {
                leader: Side::Away,
                places: 13,
            })
        );
    }

    #[test]
    fn cascade_keeps_rule_order_when_truncating() {
        let config = EngineConfig::default();
        let home = team(Some("WWWWW"), 10, 5, Some(1));
        let away = team(Some("LLLLL"), 10, 25, Some(20));
        let factors = key_factors(&home, &away, 3.2, 1.9, &config);

        assert_eq!(factors.len(), MAX_KEY_FACTORS);
        assert_eq!(factors[0], KeyFactor::BetterForm { side: Side::Home });
        assert_eq!(factors[1], KeyFactor::HomeAdvantage { percent: 25 });
        assert!(matches!(
            factors[2],
            KeyFactor::HighExpectedGoals {
                side: Side::Home,
                ..
            }
        ));
        assert!(matches!(
            factors[3],
            KeyFactor::HighExpectedGoals {
                side: Side::Away,
                ..
            }
        ));
        assert_eq!(
            factors[4],
            KeyFactor::WeakAwayDefense {
                conceded_per_game: 2.5
            }
        );
    }
}
