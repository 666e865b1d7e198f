use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

/// Ordinal fitness scale, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    Athlete,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 4] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
        FitnessLevel::Athlete,
    ];

    /// Position on the scale (Beginner = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
            FitnessLevel::Athlete => "Athlete",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fitness level: {0}")]
pub struct UnknownFitnessLevel(pub String);

impl FromStr for FitnessLevel {
    type Err = UnknownFitnessLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FitnessLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownFitnessLevel(s.to_string()))
    }
}

/// Values outside the scale are treated as "no level given"
fn lenient_fitness_level<'de, D>(deserializer: D) -> Result<Option<FitnessLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// The profile fields the compatibility scorer reads.
///
/// Every field may be empty or absent; the scorer falls back to a neutral
/// sub-score instead of rejecting sparse profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "workoutTypes", default)]
    pub workout_types: BTreeSet<String>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    #[serde(rename = "fitnessLevel", default, deserialize_with = "lenient_fitness_level")]
    pub fitness_level: Option<FitnessLevel>,
    #[serde(rename = "fitnessGoal", default)]
    pub fitness_goal: Option<String>,
    #[serde(rename = "preferredTimes", default)]
    pub preferred_times: BTreeSet<String>,
    #[serde(rename = "gymName", default)]
    pub gym_name: String,
    #[serde(default)]
    pub location: Option<Coordinates>,
    #[serde(rename = "dietType", default)]
    pub diet_type: Option<String>,
}

impl Profile {
    /// Fitness goal, with blank strings treated as missing
    pub fn goal(&self) -> Option<&str> {
        non_blank(self.fitness_goal.as_deref())
    }

    /// Diet category, with blank strings treated as missing
    pub fn diet(&self) -> Option<&str> {
        non_blank(self.diet_type.as_deref())
    }

    /// Lowercased, trimmed gym name; `None` when blank
    pub fn normalized_gym(&self) -> Option<String> {
        let trimmed = self.gym_name.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A profile offered for ranking against a seeker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Candidate {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(flatten)]
    pub profile: Profile,
}

impl Candidate {
    pub fn new(id: impl Into<String>, profile: Profile) -> Self {
        Self {
            id: id.into(),
            profile,
        }
    }
}

/// The seven compatibility dimensions, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    WorkoutTypes,
    FitnessLevel,
    FitnessGoal,
    Schedule,
    Location,
    Diet,
    Interests,
}

impl Factor {
    pub const ALL: [Factor; 7] = [
        Factor::WorkoutTypes,
        Factor::FitnessLevel,
        Factor::FitnessGoal,
        Factor::Schedule,
        Factor::Location,
        Factor::Diet,
        Factor::Interests,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Factor::WorkoutTypes => "workoutTypes",
            Factor::FitnessLevel => "fitnessLevel",
            Factor::FitnessGoal => "fitnessGoal",
            Factor::Schedule => "schedule",
            Factor::Location => "location",
            Factor::Diet => "diet",
            Factor::Interests => "interests",
        }
    }

    pub fn weight(self) -> f64 {
        FACTOR_WEIGHTS.get(self)
    }
}

/// Scoring weights, one per factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub workout_types: f64,
    pub fitness_level: f64,
    pub fitness_goal: f64,
    pub schedule: f64,
    pub location: f64,
    pub diet: f64,
    pub interests: f64,
}

/// Fixed at build time; these sum to 1.0
pub const FACTOR_WEIGHTS: ScoringWeights = ScoringWeights {
    workout_types: 0.25,
    fitness_level: 0.20,
    fitness_goal: 0.20,
    schedule: 0.15,
    location: 0.10,
    diet: 0.05,
    interests: 0.05,
};

impl ScoringWeights {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::WorkoutTypes => self.workout_types,
            Factor::FitnessLevel => self.fitness_level,
            Factor::FitnessGoal => self.fitness_goal,
            Factor::Schedule => self.schedule,
            Factor::Location => self.location,
            Factor::Diet => self.diet,
            Factor::Interests => self.interests,
        }
    }

    pub fn sum(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.get(*f)).sum()
    }
}

/// Per-factor sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScores {
    pub workout_types: f64,
    pub fitness_level: f64,
    pub fitness_goal: f64,
    pub schedule: f64,
    pub location: f64,
    pub diet: f64,
    pub interests: f64,
}

impl FactorScores {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::WorkoutTypes => self.workout_types,
            Factor::FitnessLevel => self.fitness_level,
            Factor::FitnessGoal => self.fitness_goal,
            Factor::Schedule => self.schedule,
            Factor::Location => self.location,
            Factor::Diet => self.diet,
            Factor::Interests => self.interests,
        }
    }

    /// (factor, score) pairs in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn weighted_sum(&self, weights: &ScoringWeights) -> f64 {
        self.iter().map(|(f, score)| score * weights.get(f)).sum()
    }
}

/// Discrete label derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    Excellent,
    Great,
    Good,
    Fair,
    Low,
}

impl CompatibilityLevel {
    /// Lower-inclusive bins: [0.8, 1.0], [0.65, 0.8), [0.5, 0.65), [0.35, 0.5), below
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            CompatibilityLevel::Excellent
        } else if score >= 0.65 {
            CompatibilityLevel::Great
        } else if score >= 0.5 {
            CompatibilityLevel::Good
        } else if score >= 0.35 {
            CompatibilityLevel::Fair
        } else {
            CompatibilityLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompatibilityLevel::Excellent => "Excellent Match",
            CompatibilityLevel::Great => "Great Match",
            CompatibilityLevel::Good => "Good Match",
            CompatibilityLevel::Fair => "Fair Match",
            CompatibilityLevel::Low => "Low Match",
        }
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring one pair of profiles.
///
/// Built once by the scorer and never mutated. It carries no reference to
/// the profiles it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    overall_score: f64,
    factor_scores: FactorScores,
    reasons: Vec<String>,
    level: CompatibilityLevel,
}

impl CompatibilityResult {
    pub(crate) fn from_parts(
        overall_score: f64,
        factor_scores: FactorScores,
        reasons: Vec<String>,
    ) -> Self {
        Self {
            overall_score,
            factor_scores,
            reasons,
            level: CompatibilityLevel::from_score(overall_score),
        }
    }

    pub fn overall_score(&self) -> f64 {
        self.overall_score
    }

    pub fn factor_scores(&self) -> &FactorScores {
        &self.factor_scores
    }

    /// All reasons, in factor evaluation order
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// At most `n` reasons from the front of the list
    pub fn top_reasons(&self, n: usize) -> &[String] {
        &self.reasons[..n.min(self.reasons.len())]
    }

    pub fn level(&self) -> CompatibilityLevel {
        self.level
    }
}

/// One candidate's scored result within a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(flatten)]
    pub result: CompatibilityResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_level_parse() {
        assert_eq!("beginner".parse::<FitnessLevel>(), Ok(FitnessLevel::Beginner));
        assert_eq!(" Athlete ".parse::<FitnessLevel>(), Ok(FitnessLevel::Athlete));
        assert!("Elite".parse::<FitnessLevel>().is_err());
    }

    #[test]
    fn test_unknown_level_deserializes_as_none() {
        let profile: Profile = serde_json::from_str(r#"{"fitnessLevel": "Elite"}"#).unwrap();
        assert_eq!(profile.fitness_level, None);

        let profile: Profile = serde_json::from_str(r#"{"fitnessLevel": "advanced"}"#).unwrap();
        assert_eq!(profile.fitness_level, Some(FitnessLevel::Advanced));
    }

    #[test]
    fn test_blank_goal_and_diet_are_missing() {
        let profile = Profile {
            fitness_goal: Some("   ".to_string()),
            diet_type: Some(String::new()),
            gym_name: "  ".to_string(),
            ..Profile::default()
        };
        assert_eq!(profile.goal(), None);
        assert_eq!(profile.diet(), None);
        assert_eq!(profile.normalized_gym(), None);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((FACTOR_WEIGHTS.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_level_bins() {
        assert_eq!(CompatibilityLevel::from_score(1.0), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(0.8), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(0.799999), CompatibilityLevel::Great);
        assert_eq!(CompatibilityLevel::from_score(0.65), CompatibilityLevel::Great);
        assert_eq!(CompatibilityLevel::from_score(0.5), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(0.35), CompatibilityLevel::Fair);
        assert_eq!(CompatibilityLevel::from_score(0.3499), CompatibilityLevel::Low);
        assert_eq!(CompatibilityLevel::from_score(0.0), CompatibilityLevel::Low);
    }

    #[test]
    fn test_top_reasons_is_bounded_prefix() {
        let scores = FactorScores {
            workout_types: 1.0,
            fitness_level: 1.0,
            fitness_goal: 1.0,
            schedule: 1.0,
            location: 1.0,
            diet: 1.0,
            interests: 1.0,
        };
        let reasons = vec!["a".to_string(), "b".to_string()];
        let result = CompatibilityResult::from_parts(1.0, scores, reasons);

        assert_eq!(result.top_reasons(1), ["a".to_string()]);
        assert_eq!(result.top_reasons(3).len(), 2);
        assert!(result.top_reasons(0).is_empty());
    }

    #[test]
    fn test_candidate_flattens_profile() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"id": "c1", "workoutTypes": ["Yoga"], "gymName": "Equinox"}"#,
        )
        .unwrap();
        assert_eq!(candidate.id, "c1");
        assert!(candidate.profile.workout_types.contains("Yoga"));
        assert_eq!(candidate.profile.gym_name, "Equinox");
    }
}
