use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors from fanning ranking work out to the blocking pool
#[derive(Debug, Error)]
pub enum RankError {
    #[error("ranking worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Errors returned by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{count} candidates exceeds the limit of {max}")]
    TooManyCandidates { count: usize, max: usize },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    Ranking(#[from] RankError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::TooManyCandidates { .. } => "too_many_candidates",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::Ranking(_) => "ranking_failed",
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::TooManyCandidates { .. } | ApiError::InvalidJson(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Ranking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::TooManyCandidates { count: 5, max: 2 }.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_too_many_candidates_message() {
        let err = ApiError::TooManyCandidates { count: 5, max: 2 };
        assert_eq!(err.to_string(), "5 candidates exceeds the limit of 2");
    }
}
