//! Fitmatch - compatibility scoring for workout-partner matchmaking
//!
//! The core of this library is [`calculate_compatibility`], a pure function that
//! turns two profiles into a weighted score, match reasons and a compatibility
//! level. [`Matcher`] ranks a batch of candidates with it, and the `routes`
//! module exposes both over HTTP.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use self::core::{calculate_compatibility, haversine_distance, MatchResult, Matcher};
pub use error::{ApiError, RankError};
pub use models::{
    Candidate, CompatibilityLevel, CompatibilityResult, Coordinates, Factor, FactorScores,
    FitnessLevel, Profile, RankedMatch, FACTOR_WEIGHTS,
};
