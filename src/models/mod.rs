// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, CompatibilityLevel, CompatibilityResult, Coordinates, Factor, FactorScores,
    FitnessLevel, Profile, RankedMatch, ScoringWeights, UnknownFitnessLevel, FACTOR_WEIGHTS,
};
pub use requests::{RankRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, RankedMatchResponse, ScoreResponse};
