use crate::core::{factors::compute_factor_scores, reasons::derive_reasons};
use crate::models::{CompatibilityResult, FactorScores, Profile, FACTOR_WEIGHTS};

/// Score how well two profiles fit as workout partners.
///
/// Scoring formula:
/// overall = (
///     workout_types * 0.25 +   # Jaccard over workout tags
///     fitness_level * 0.20 +   # ordinal distance step
///     fitness_goal  * 0.20 +   # exact / related / different
///     schedule      * 0.15 +   # shared slots vs smaller schedule
///     location      * 0.10 +   # gym, chain, then distance
///     diet          * 0.05 +   # exact / related / different
///     interests     * 0.05     # Jaccard over interest tags
/// )
///
/// Never fails: missing fields fall back to each factor's neutral score.
/// The same inputs always produce the same result.
pub fn calculate_compatibility(a: &Profile, b: &Profile) -> CompatibilityResult {
    let factor_scores = compute_factor_scores(a, b);
    let reasons = derive_reasons(a, b, &factor_scores);

    CompatibilityResult::from_parts(overall_score(&factor_scores), factor_scores, reasons)
}

/// Scores are snapped to this many steps per unit before classification
const SCORE_PRECISION: f64 = 1e9;

/// Weighted sum of the factor scores, kept inside [0, 1].
///
/// The sum is rounded to 1e-9 so float error cannot drop a score that sits
/// exactly on a level boundary (0.5 summing to 0.49999999999999994) into the
/// bin below.
#[inline]
pub fn overall_score(scores: &FactorScores) -> f64 {
    let sum = scores.weighted_sum(&FACTOR_WEIGHTS);
    ((sum * SCORE_PRECISION).round() / SCORE_PRECISION).clamp(0.0, 1.0)
}
