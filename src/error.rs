//! Error types for the benefits registry
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;

use crate::registry::UserId;

// == Eligibility Error Enum ==
/// Unified error type for eligibility reads and profile writes.
#[derive(Error, Debug)]
pub enum EligibilityError {
    /// No profile stored under this id
    #[error("Profile not found: {0}")]
    NotFound(UserId),

    /// A birthday anniversary fell after the last criteria selection
    #[error(
        "Criteria may be stale: anniversary of {subject_birth_date} is after selection date {reference_date}, resubmit criteria before reading"
    )]
    Stale {
        subject_birth_date: NaiveDate,
        reference_date: NaiveDate,
    },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Profile store or benefit catalog failure
    #[error("Store unavailable: {0}")]
    Store(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EligibilityError {
    /// True for failures the caller may retry unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EligibilityError::Store(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for EligibilityError {
    fn into_response(self) -> Response {
        let status = match &self {
            EligibilityError::NotFound(_) => StatusCode::NOT_FOUND,
            EligibilityError::Stale { .. } => StatusCode::CONFLICT,
            EligibilityError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            EligibilityError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            EligibilityError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the registry.
pub type Result<T> = std::result::Result<T, EligibilityError>;
