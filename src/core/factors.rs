use std::collections::BTreeSet;

use crate::core::{catalog, distance::distance_miles};
use crate::models::{FactorScores, FitnessLevel, Profile};

/// Score used when a factor's input is missing on either side
pub const NEUTRAL_SCORE: f64 = 0.5;

pub const GOAL_RELATED_SCORE: f64 = 0.75;
/// Different goals are never treated as fully incompatible
pub const GOAL_DEFAULT_SCORE: f64 = 0.3;

/// Both sides gave slots but none line up
pub const SCHEDULE_NO_OVERLAP_SCORE: f64 = 0.1;

pub const SAME_GYM_SCORE: f64 = 1.0;
pub const SAME_CHAIN_SCORE: f64 = 0.8;
pub const WITHIN_5_MILES_SCORE: f64 = 0.6;
pub const WITHIN_15_MILES_SCORE: f64 = 0.4;
pub const FAR_AWAY_SCORE: f64 = 0.2;
pub const LOCATION_UNKNOWN_SCORE: f64 = 0.3;

pub const DIET_RELATED_SCORE: f64 = 0.7;
pub const DIET_DEFAULT_SCORE: f64 = 0.4;

/// Compute all seven factor scores for a pair of profiles
pub fn compute_factor_scores(a: &Profile, b: &Profile) -> FactorScores {
    FactorScores {
        workout_types: workout_type_score(a, b),
        fitness_level: fitness_level_score(a.fitness_level, b.fitness_level),
        fitness_goal: fitness_goal_score(a.goal(), b.goal()),
        schedule: schedule_score(&a.preferred_times, &b.preferred_times),
        location: location_score(a, b),
        diet: diet_score(a.diet(), b.diet()),
        interests: interest_score(a, b),
    }
}

/// Jaccard index of the workout-type tags
#[inline]
pub fn workout_type_score(a: &Profile, b: &Profile) -> f64 {
    jaccard(&a.workout_types, &b.workout_types).unwrap_or(NEUTRAL_SCORE)
}

/// Coarse step function over the ordinal distance between levels
#[inline]
pub fn fitness_level_score(a: Option<FitnessLevel>, b: Option<FitnessLevel>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return NEUTRAL_SCORE;
    };

    match a.index().abs_diff(b.index()) {
        0 => 1.0,
        1 => 0.7,
        2 => 0.4,
        _ => 0.2,
    }
}

#[inline]
pub fn fitness_goal_score(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return GOAL_DEFAULT_SCORE;
    };

    if a == b {
        1.0
    } else if catalog::goals_related(a, b) {
        GOAL_RELATED_SCORE
    } else {
        GOAL_DEFAULT_SCORE
    }
}

/// Shared slots relative to the smaller of the two schedules
#[inline]
pub fn schedule_score(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return NEUTRAL_SCORE;
    }

    let shared = a.intersection(b).count();
    if shared == 0 {
        return SCHEDULE_NO_OVERLAP_SCORE;
    }

    shared as f64 / a.len().min(b.len()) as f64
}

/// Gym name first, then chain, then distance between coordinates
pub fn location_score(a: &Profile, b: &Profile) -> f64 {
    if let (Some(gym_a), Some(gym_b)) = (a.normalized_gym(), b.normalized_gym()) {
        if gym_a == gym_b {
            return SAME_GYM_SCORE;
        }
        if catalog::shared_chain(&gym_a, &gym_b).is_some() {
            return SAME_CHAIN_SCORE;
        }
    }

    match (&a.location, &b.location) {
        (Some(here), Some(there)) => distance_tier_score(distance_miles(here, there)),
        _ => LOCATION_UNKNOWN_SCORE,
    }
}

#[inline]
fn distance_tier_score(miles: f64) -> f64 {
    if miles <= 5.0 {
        WITHIN_5_MILES_SCORE
    } else if miles <= 15.0 {
        WITHIN_15_MILES_SCORE
    } else {
        FAR_AWAY_SCORE
    }
}

/// Only `a`'s table entry is consulted, so this is not symmetric for
/// one-way table entries
#[inline]
pub fn diet_score(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return NEUTRAL_SCORE;
    };

    if a == b {
        1.0
    } else if catalog::diet_lists(a, b) {
        DIET_RELATED_SCORE
    } else {
        DIET_DEFAULT_SCORE
    }
}

#[inline]
pub fn interest_score(a: &Profile, b: &Profile) -> f64 {
    jaccard(&a.interests, &b.interests).unwrap_or(NEUTRAL_SCORE)
}

/// |A ∩ B| / |A ∪ B|, or `None` when either set is empty
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    Some(shared as f64 / union as f64)
}
