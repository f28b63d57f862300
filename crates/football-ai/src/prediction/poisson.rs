use super::domain::OutcomeProbabilities;

/// Highest goal count enumerated per side.
pub const MAX_GOALS: usize = 6;

/// Poisson probability of exactly `k` goals at rate `lambda`.
pub fn pmf(k: u32, lambda: f64) -> f64 {
    let factorial: f64 = (1..=k).map(f64::from).product();
    lambda.powi(k as i32) * (-lambda).exp() / factorial
}

fn pmf_table(lambda: f64) -> [f64; MAX_GOALS + 1] {
    let mut table = [0.0; MAX_GOALS + 1];
    for (k, slot) in table.iter_mut().enumerate() {
        *slot = pmf(k as u32, lambda);
    }
    table
}

/// Win/draw/loss split from independent Poisson scorelines up to [`MAX_GOALS`] each.
///
/// The truncated tail is renormalised away so the three outcomes sum to one.
pub fn outcome_probabilities(home_xg: f64, away_xg: f64) -> OutcomeProbabilities {
    let home = pmf_table(home_xg);
    let away = pmf_table(away_xg);

    let mut home_win = 0.0;
    let mut draw = 0.0;
    let mut away_win = 0.0;

    for (i, p_home) in home.iter().enumerate() {
        for (j, p_away) in away.iter().enumerate() {
            let p = p_home * p_away;
            if i > j {
                home_win += p;
            } else if i == j {
                draw += p;
            } else {
                away_win += p;
            }
        }
    }

    let total = home_win + draw + away_win;
    OutcomeProbabilities {
        home_win: home_win / total,
        draw: draw / total,
        away_win: away_win / total,
    }
}
