use serde::{Deserialize, Serialize};

/// Season-to-date record for one side of a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_id: u64,
    pub name: String,
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub home_wins: u32,
    #[serde(default)]
    pub away_wins: u32,
    /// Most recent result first, e.g. `"WWDLW"`.
    #[serde(default)]
    pub last_five_form: Option<String>,
    /// 1 is the top of the table.
    #[serde(default)]
    pub league_position: Option<u32>,
}

impl TeamStats {
    pub fn goals_scored_per_game(&self) -> Option<f64> {
        per_game(self.goals_for, self.matches_played)
    }

    pub fn goals_conceded_per_game(&self) -> Option<f64> {
        per_game(self.goals_against, self.matches_played)
    }

    /// League position, treating `0` the same as an unknown position.
    pub fn ranked_position(&self) -> Option<u32> {
        self.league_position.filter(|position| *position > 0)
    }
}

fn per_game(total: u32, matches_played: u32) -> Option<f64> {
    if matches_played == 0 {
        None
    } else {
        Some(f64::from(total) / f64::from(matches_played))
    }
}

/// Fixture to be priced, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub fixture_id: u64,
    pub home_team: TeamStats,
    pub away_team: TeamStats,
    #[serde(default)]
    pub h2h_home_wins: u32,
    #[serde(default)]
    pub h2h_away_wins: u32,
    #[serde(default)]
    pub h2h_draws: u32,
    /// Accepted for compatibility with existing clients; the model ignores it.
    #[serde(default)]
    pub is_home_favorite: bool,
}

impl PredictionRequest {
    pub fn head_to_head(&self) -> HeadToHead {
        HeadToHead {
            home_wins: self.h2h_home_wins,
            away_wins: self.h2h_away_wins,
            draws: self.h2h_draws,
        }
    }
}

/// Results of previous meetings between the two sides, from the home side's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadToHead {
    pub home_wins: u32,
    pub away_wins: u32,
    pub draws: u32,
}

impl HeadToHead {
    pub fn total(&self) -> u64 {
        u64::from(self.home_wins) + u64::from(self.away_wins) + u64::from(self.draws)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Outcome {
    /// Enumeration order, which doubles as the tie-break when probabilities are equal.
    pub const ALL: [Outcome; 3] = [Outcome::HomeWin, Outcome::Draw, Outcome::AwayWin];
}

/// Full-time result distribution; the three entries sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeProbabilities {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}

impl OutcomeProbabilities {
    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::HomeWin => self.home_win,
            Outcome::Draw => self.draw,
            Outcome::AwayWin => self.away_win,
        }
    }

    /// Most likely outcome and its probability. Ties go to the earlier entry of [`Outcome::ALL`].
    pub fn favored(&self) -> (Outcome, f64) {
        let mut best = (Outcome::HomeWin, self.home_win);
        for outcome in &Outcome::ALL[1..] {
            let probability = self.get(*outcome);
            if probability > best.1 {
                best = (*outcome, probability);
            }
        }
        best
    }

    pub fn max(&self) -> f64 {
        self.favored().1
    }

    pub fn is_finite(&self) -> bool {
        self.home_win.is_finite() && self.draw.is_finite() && self.away_win.is_finite()
    }
}

/// Qualitative strength of the top outcome, used in the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.5 {
            Self::High
        } else if probability > 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Prediction returned to callers. Percentages and scores are rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub fixture_id: u64,
    pub home_win_prob: f64,
    pub draw_prob: f64,
    pub away_win_prob: f64,
    pub predicted_home_score: f64,
    pub predicted_away_score: f64,
    pub confidence: f64,
    pub model_version: String,
    pub key_factors: Vec<String>,
    pub explanation: String,
}
