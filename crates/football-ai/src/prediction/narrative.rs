//! Turkish wording for factors and the summary sentence.
//!
//! The numeric stages hand structured values to this module and never build text themselves.

use super::domain::{ConfidenceLevel, Outcome, OutcomeProbabilities, Side};
use super::factors::KeyFactor;

pub fn render_factor(factor: &KeyFactor) -> String {
    match factor {
        KeyFactor::BetterForm { side: Side::Home } => {
            "Ev sahibi son maçlarda daha iyi formda".to_string()
        }
        KeyFactor::BetterForm { side: Side::Away } => {
            "Deplasman takımı son maçlarda daha iyi formda".to_string()
        }
        KeyFactor::HomeAdvantage { percent } => {
            format!("Ev sahibi avantajı hesaba katıldı (+{percent}%)")
        }
        KeyFactor::HighExpectedGoals {
            side: Side::Home,
            expected_goals,
        } => format!("Ev sahibinin gol beklentisi yüksek ({expected_goals:.2})"),
        KeyFactor::HighExpectedGoals {
            side: Side::Away,
            expected_goals,
        } => format!("Deplasman takımının gol beklentisi yüksek ({expected_goals:.2})"),
        KeyFactor::WeakAwayDefense { conceded_per_game } => {
            format!("Deplasman defansı zayıf ({conceded_per_game:.1} gol/maç)")
        }
        KeyFactor::LeaguePositionGap {
            leader: Side::Home,
            places,
        } => format!("Ev sahibi ligde {places} sıra üstte"),
        KeyFactor::LeaguePositionGap {
            leader: Side::Away,
            places,
        } => format!("Deplasman takımı ligde {places} sıra üstte"),
    }
}

pub fn render_factors(factors: &[KeyFactor]) -> Vec<String> {
    factors.iter().map(render_factor).collect()
}

fn confidence_label(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => "yüksek",
        ConfidenceLevel::Medium => "orta",
        ConfidenceLevel::Low => "düşük",
    }
}

/// One-paragraph summary naming the favoured outcome, its probability and the expected score.
pub fn explanation(
    probabilities: &OutcomeProbabilities,
    home_name: &str,
    away_name: &str,
    home_xg: f64,
    away_xg: f64,
) -> String {
    let (favored, probability) = probabilities.favored();
    let verdict = match favored {
        Outcome::HomeWin => format!("{home_name} kazanır"),
        Outcome::AwayWin => format!("{away_name} kazanır"),
        Outcome::Draw => "Beraberlik".to_string(),
    };
    let label = confidence_label(ConfidenceLevel::from_probability(probability));

    format!(
        "Model tahmini: {verdict} (%{:.0} olasılık). Beklenen skor: {home_xg:.1} - {away_xg:.1}. Güven seviyesi: {label}.",
        probability * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_factor_kind() {
        assert_eq!(
            render_factor(&KeyFactor::HomeAdvantage { percent: 25 }),
            "Ev sahibi avantajı hesaba katıldı (+25%)"
        );
        assert_eq!(
            render_factor(&KeyFactor::HighExpectedGoals {
                side: Side::Away,
                expected_goals: 1.734,
            }),
            "Deplasman takımının gol beklentisi yüksek (1.73)"
        );
        assert_eq!(
            render_factor(&KeyFactor::WeakAwayDefense {
                conceded_per_game: 2.4
            }),
            "Deplasman defansı zayıf (2.4 gol/maç)"
        );
        assert_eq!(
            render_factor(&KeyFactor::LeaguePositionGap {
                leader: Side::Home,
                places: 12,
            }),
            "Ev sahibi ligde 12 sıra üstte"
        );
    }

    #[test]
    fn explanation_names_the_favourite() {
        let probabilities = OutcomeProbabilities {
            home_win: 0.21,
            draw: 0.27,
            away_win: 0.52,
        };
        assert_eq!(
            explanation(&probabilities, "Bursaspor", "Trabzonspor", 0.9, 1.7),
            "Model tahmini: Trabzonspor kazanır (%52 olasılık). Beklenen skor: 0.9 - 1.7. Güven seviyesi: yüksek."
        );
    }

    #[test]
    fn explanation_reports_draws_with_low_confidence() {
        let probabilities = OutcomeProbabilities {
            home_win: 0.33,
            draw: 0.36,
            away_win: 0.31,
        };
        let text = explanation(&probabilities, "Konya", "Hatay", 1.1, 1.0);
        assert!(text.starts_with("Model tahmini: Beraberlik (%36 olasılık)."));
        assert!(text.ends_with("Güven seviyesi: düşük."));
    }
}
