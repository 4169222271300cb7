use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Rejected scheduler input. Raised before any state is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("counts must be positive")]
    CountsNotPositive,

    #[error("at least 3 judges required (got {judges})")]
    TooFewJudges { judges: usize },

    #[error("too many judges ({judges}), at most {max} supported")]
    TooManyJudges { judges: usize, max: usize },

    #[error("too many teams ({teams}), at most {max} supported")]
    TooManyTeams { teams: usize, max: usize },

    #[error("invalid start time {input:?}, expected H:MM AM/PM")]
    InvalidStartTime { input: String },
}

impl ScheduleError {
    /// Every scheduler error is a validation failure of the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScheduleError::CountsNotPositive
                | ScheduleError::TooFewJudges { .. }
                | ScheduleError::TooManyJudges { .. }
                | ScheduleError::TooManyTeams { .. }
                | ScheduleError::InvalidStartTime { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Schedule not available")]
    NoSchedule,

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("Failed to encode schedule: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NoSchedule => StatusCode::NOT_FOUND,
            AppError::Schedule(_) => StatusCode::BAD_REQUEST,
            AppError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ScheduleError::CountsNotPositive.to_string(), "counts must be positive");
        assert!(ScheduleError::TooFewJudges { judges: 2 }
            .to_string()
            .starts_with("at least 3 judges required"));
        assert_eq!(
            ScheduleError::TooManyTeams { teams: 10_001, max: 10_000 }.to_string(),
            "too many teams (10001), at most 10000 supported"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NoSchedule.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(ScheduleError::CountsNotPositive).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
