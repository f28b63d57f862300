use clap::Args;
use football_ai::config::AppConfig;
use football_ai::error::AppError;
use football_ai::prediction::{
    BatchOutcome, FixtureCsvImporter, ModelInfo, PredictionEngine, RejectedRow,
};
use std::path::PathBuf;

use crate::infra::read_request_file;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// JSON file with one prediction request or an array of requests
    #[arg(long, required_unless_present = "csv", conflicts_with = "csv")]
    pub(crate) request: Option<PathBuf>,
    /// Flat CSV export with one fixture per row
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = PredictionEngine::new(config.engine);

    let (outcome, rejected) = match (args.request, args.csv) {
        (Some(path), _) => {
            let fixtures = read_request_file(&path)?;
            (engine.predict_batch(fixtures), Vec::new())
        }
        (None, Some(path)) => {
            let import = FixtureCsvImporter::from_path(path)?;
            (engine.predict_many(&import.requests), import.rejected)
        }
        (None, None) => (BatchOutcome::default(), Vec::new()),
    };

    print!("{}", render_predictions(&outcome, &rejected, engine.model_version()));
    Ok(())
}

pub(crate) fn run_model_info() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = PredictionEngine::new(config.engine);
    print!("{}", render_model_info(&engine.model_info()));
    Ok(())
}

pub(crate) fn render_predictions(
    outcome: &BatchOutcome,
    rejected: &[RejectedRow],
    model_version: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Match predictions ({model_version})\n"));

    for prediction in &outcome.predictions {
        out.push_str(&format!(
            "\nFixture {}: home {:.1}% | draw {:.1}% | away {:.1}%\n",
            prediction.fixture_id,
            prediction.home_win_prob,
            prediction.draw_prob,
            prediction.away_win_prob
        ));
        out.push_str(&format!(
            "  expected score {:.1} - {:.1}, confidence {:.1}\n",
            prediction.predicted_home_score, prediction.predicted_away_score, prediction.confidence
        ));
        for factor in &prediction.key_factors {
            out.push_str(&format!("  - {factor}\n"));
        }
        out.push_str(&format!("  {}\n", prediction.explanation));
    }

    if !rejected.is_empty() {
        out.push_str("\nRejected CSV rows\n");
        for row in rejected {
            out.push_str(&format!("- row {}: {}\n", row.row, row.reason));
        }
    }

    if !outcome.failures.is_empty() {
        out.push_str("\nSkipped fixtures\n");
        for failure in &outcome.failures {
            let label = failure
                .fixture_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| format!("#{}", failure.index + 1));
            out.push_str(&format!("- {label}: {}\n", failure.error));
        }
    }

    out.push_str(&format!("\nPredicted {} fixture(s)\n", outcome.total()));
    out
}

pub(crate) fn render_model_info(info: &ModelInfo) -> String {
    format!(
        "Model {} ({})\nFeatures: {}\nTrained on: {}\nAccuracy: match result {:.2}, score MAE {:.2}, over/under 2.5 {:.2}\n",
        info.model_version,
        info.model_type,
        info.features_count,
        info.trained_on,
        info.accuracy.match_result,
        info.accuracy.score_mae,
        info.accuracy.over_under_2_5
    )
}
