use axum::response::Response;
use serde_json::Value;

use crate::prediction::domain::{PredictionRequest, TeamStats};
use crate::prediction::{EngineConfig, PredictionEngine};

pub(super) fn team(
    team_id: u64,
    name: &str,
    matches_played: u32,
    goals_for: u32,
    goals_against: u32,
) -> TeamStats {
    TeamStats {
        team_id,
        name: name.to_string(),
        matches_played,
        wins: 0,
        draws: 0,
        losses: 0,
        goals_for,
        goals_against,
        home_wins: 0,
        away_wins: 0,
        last_five_form: None,
        league_position: None,
    }
}

/// League leaders in form at home to a struggling side near the bottom.
pub(super) fn mismatch_request() -> PredictionRequest {
    let mut home = team(11, "Fenerbahçe", 10, 20, 10);
    home.wins = 8;
    home.draws = 1;
    home.losses = 1;
    home.last_five_form = Some("WWWWW".to_string());
    home.league_position = Some(1);

    let mut away = team(12, "Adana Demirspor", 10, 8, 15);
    away.wins = 1;
    away.draws = 2;
    away.losses = 7;
    away.last_five_form = Some("LLLLL".to_string());
    away.league_position = Some(18);

    PredictionRequest {
        fixture_id: 1001,
        home_team: home,
        away_team: away,
        h2h_home_wins: 0,
        h2h_away_wins: 0,
        h2h_draws: 0,
        is_home_favorite: true,
    }
}

/// Two sides with no matches, form or table position.
pub(super) fn blank_request() -> PredictionRequest {
    PredictionRequest {
        fixture_id: 1002,
        home_team: team(21, "Pendikspor", 0, 0, 0),
        away_team: team(22, "Ankaragücü", 0, 0, 0),
        h2h_home_wins: 0,
        h2h_away_wins: 0,
        h2h_draws: 0,
        is_home_favorite: false,
    }
}

pub(super) fn engine() -> PredictionEngine {
    PredictionEngine::new(EngineConfig::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
