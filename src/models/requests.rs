use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Candidate, Profile};

/// Request to score one pair of profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[serde(rename = "profileA")]
    pub profile_a: Profile,
    #[serde(rename = "profileB")]
    pub profile_b: Profile,
    // diet never produces a reason, so six is the most there can be
    #[validate(range(min = 1, max = 6))]
    #[serde(rename = "topReasons", default)]
    pub top_reasons: Option<usize>,
}

/// Request to rank candidates against a seeker profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub profile: Profile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}
