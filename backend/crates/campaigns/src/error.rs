//! Campaign Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Campaign-specific result type alias
pub type CampaignResult<T> = Result<T, CampaignError>;

/// Campaign-specific error variants
#[derive(Debug, Error)]
pub enum CampaignError {
    /// Path id did not parse as an integer
    #[error("Valid campaign ID is required.")]
    InvalidId,

    /// Request validation failed (message is user-facing)
    #[error("{0}")]
    Validation(String),

    /// Campaign does not exist
    #[error("Campaign not found.")]
    NotFound,

    /// Donations still reference the campaign; hard delete is blocked
    #[error("Campaign has recorded donations and cannot be deleted.")]
    HasDonations,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CampaignError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CampaignError::InvalidId | CampaignError::Validation(_) => ErrorKind::BadRequest,
            CampaignError::NotFound => ErrorKind::NotFound,
            CampaignError::HasDonations => ErrorKind::Conflict,
            CampaignError::Database(_) | CampaignError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side faults get a generic message; no internal detail leaks.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, "Internal server error.")
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    fn log(&self) {
        match self {
            CampaignError::Database(e) => {
                tracing::error!(error = %e, "Campaign database error");
            }
            CampaignError::Internal(msg) => {
                tracing::error!(message = %msg, "Campaign internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Campaign error");
            }
        }
    }
}

impl IntoResponse for CampaignError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
