// Core algorithm exports
pub mod catalog;
pub mod distance;
pub mod factors;
pub mod matcher;
pub mod reasons;
pub mod scoring;

pub use distance::{distance_miles, haversine_distance};
pub use factors::compute_factor_scores;
pub use matcher::{MatchResult, Matcher};
pub use reasons::derive_reasons;
pub use scoring::{calculate_compatibility, overall_score};
