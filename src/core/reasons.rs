use crate::models::{FactorScores, Profile};

const SHARED_WORKOUTS_THRESHOLD: f64 = 0.7;
const SIMILAR_LEVEL_THRESHOLD: f64 = 0.8;
const ALIGNED_GOALS_THRESHOLD: f64 = 0.8;
const SHARED_SCHEDULE_THRESHOLD: f64 = 0.7;
const SAME_GYM_THRESHOLD: f64 = 0.9;
const NEARBY_THRESHOLD: f64 = 0.5;
const SHARED_INTERESTS_THRESHOLD: f64 = 0.5;

/// Most shared workout types named in a reason
const MAX_NAMED_WORKOUTS: usize = 2;

/// Turn factor scores into human-readable reasons.
///
/// Reasons come out in factor evaluation order, not sorted by strength.
/// Diet never produces a reason.
pub fn derive_reasons(a: &Profile, b: &Profile, scores: &FactorScores) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.workout_types > SHARED_WORKOUTS_THRESHOLD {
        let shared: Vec<&str> = a
            .workout_types
            .intersection(&b.workout_types)
            .take(MAX_NAMED_WORKOUTS)
            .map(String::as_str)
            .collect();
        reasons.push(format!("Shared workout types: {}", shared.join(", ")));
    }

    if scores.fitness_level > SIMILAR_LEVEL_THRESHOLD {
        reasons.push("Similar fitness level".to_string());
    }

    if scores.fitness_goal > ALIGNED_GOALS_THRESHOLD {
        reasons.push("Aligned fitness goals".to_string());
    }

    if scores.schedule > SHARED_SCHEDULE_THRESHOLD {
        if let Some(slot) = a.preferred_times.intersection(&b.preferred_times).next() {
            reasons.push(format!("Both prefer {} workouts", slot));
        }
    }

    if scores.location > SAME_GYM_THRESHOLD {
        reasons.push("Same gym".to_string());
    } else if scores.location > NEARBY_THRESHOLD {
        reasons.push("Nearby location".to_string());
    }

    if scores.interests > SHARED_INTERESTS_THRESHOLD {
        reasons.push("Shared interests".to_string());
    }

    reasons
}
