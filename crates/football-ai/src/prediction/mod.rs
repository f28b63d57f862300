//! Analytical match outcome model.
//!
//! Season statistics become attack and defence ratios against a league-average baseline,
//! are adjusted for venue, recent form, league position and head-to-head record, and the
//! resulting expected-goal rates are turned into win/draw/loss probabilities with independent
//! Poisson scorelines. Every prediction is a pure function of the request and the engine's
//! fixed [`EngineConfig`].

pub mod batch;
pub mod config;
pub mod domain;
mod engine;
pub mod factors;
pub mod form;
pub mod goals;
pub mod import;
pub mod metadata;
pub mod narrative;
pub mod poisson;
pub mod router;
pub mod strength;

#[cfg(test)]
mod tests;

pub use batch::{BatchFailure, BatchOutcome};
pub use config::EngineConfig;
pub use domain::{
    ConfidenceLevel, HeadToHead, Outcome, OutcomeProbabilities, PredictionRequest,
    PredictionResult, Side, TeamStats,
};
pub use engine::{confidence, PredictionEngine, PredictionError};
pub use factors::KeyFactor;
pub use import::{FixtureCsvImporter, FixtureImport, FixtureImportError, RejectedRow};
pub use metadata::{AccuracyMetrics, ModelInfo};
pub use router::{prediction_router, BatchPredictionRequest, BatchPredictionResponse};
