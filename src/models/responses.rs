use serde::{Deserialize, Serialize};

use crate::core::MatchResult;
use crate::models::domain::{CompatibilityLevel, CompatibilityResult, FactorScores, RankedMatch};

/// A compatibility result as returned over HTTP, with reasons cut to a prefix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "overallScore")]
    pub overall_score: f64,
    pub level: CompatibilityLevel,
    #[serde(rename = "levelLabel")]
    pub level_label: String,
    #[serde(rename = "factorScores")]
    pub factor_scores: FactorScores,
    pub reasons: Vec<String>,
}

impl ScoreResponse {
    pub fn from_result(result: &CompatibilityResult, top_reasons: usize) -> Self {
        Self {
            overall_score: result.overall_score(),
            level: result.level(),
            level_label: result.level().label().to_string(),
            factor_scores: *result.factor_scores(),
            reasons: result.top_reasons(top_reasons).to_vec(),
        }
    }
}

/// One ranked candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatchResponse {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(flatten)]
    pub score: ScoreResponse,
}

impl RankedMatchResponse {
    pub fn from_match(ranked: &RankedMatch, top_reasons: usize) -> Self {
        Self {
            candidate_id: ranked.candidate_id.clone(),
            score: ScoreResponse::from_result(&ranked.result, top_reasons),
        }
    }
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub matches: Vec<RankedMatchResponse>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

impl RankResponse {
    pub fn from_result(result: &MatchResult, top_reasons: usize) -> Self {
        Self {
            matches: result
                .matches
                .iter()
                .map(|m| RankedMatchResponse::from_match(m, top_reasons))
                .collect(),
            total_candidates: result.total_candidates,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
