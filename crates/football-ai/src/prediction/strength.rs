use super::domain::TeamStats;

/// Assumed league-wide goals per team per game.
pub const LEAGUE_AVERAGE_GOALS: f64 = 1.3;

/// Scoring rate relative to the league average. Neutral (1.0) before a team has played.
pub fn attack_strength(stats: &TeamStats) -> f64 {
    stats
        .goals_scored_per_game()
        .map_or(1.0, |rate| rate / LEAGUE_AVERAGE_GOALS)
}

/// Conceding rate relative to the league average; lower is a stronger defence.
pub fn defense_strength(stats: &TeamStats) -> f64 {
    stats
        .goals_conceded_per_game()
        .map_or(1.0, |rate| rate / LEAGUE_AVERAGE_GOALS)
}
