//! Donation Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Donation-specific result type alias
pub type DonationResult<T> = Result<T, DonationError>;

/// Donation-specific error variants
#[derive(Debug, Error)]
pub enum DonationError {
    /// Request validation failed (message is user-facing)
    #[error("{0}")]
    Validation(String),

    /// Referenced campaign does not exist
    #[error("Campaign not found.")]
    CampaignNotFound,

    /// Provider reports the session's payment as anything but paid
    #[error("Payment not completed")]
    PaymentNotCompleted { status: String },

    /// Provider-side failure while creating or retrieving a session;
    /// the provider's message is surfaced
    #[error("{0}")]
    PaymentSetup(String),

    /// A donation for this checkout session already exists
    ///
    /// Raised by the unique session-id constraint when two verifications
    /// race; the verify use case resolves it to the recorded donation.
    #[error("Donation already recorded")]
    SessionAlreadyRecorded,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DonationError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DonationError::Validation(_) | DonationError::PaymentNotCompleted { .. } => {
                ErrorKind::BadRequest
            }
            DonationError::CampaignNotFound => ErrorKind::NotFound,
            DonationError::PaymentSetup(_) => ErrorKind::BadGateway,
            DonationError::SessionAlreadyRecorded => ErrorKind::Conflict,
            DonationError::Database(_) | DonationError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Provider failures keep the provider's message even though they
    /// map to a 5xx status; our own faults stay generic.
    pub fn to_app_error(&self) -> AppError {
        match self {
            DonationError::PaymentSetup(message) => AppError::bad_gateway(message.clone()),
            _ if self.kind().is_server_error() => {
                AppError::new(self.kind(), "Internal server error.")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            DonationError::Database(e) => {
                tracing::error!(error = %e, "Donation database error");
            }
            DonationError::Internal(msg) => {
                tracing::error!(message = %msg, "Donation internal error");
            }
            DonationError::PaymentSetup(msg) => {
                tracing::error!(message = %msg, "Checkout provider error");
            }
            DonationError::PaymentNotCompleted { status } => {
                tracing::warn!(payment_status = %status, "Verification of an unpaid session");
            }
            _ => {
                tracing::debug!(error = %self, "Donation error");
            }
        }
    }
}

impl IntoResponse for DonationError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            DonationError::Validation("x".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(DonationError::CampaignNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            DonationError::PaymentNotCompleted {
                status: "unpaid".into()
            }
            .kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            DonationError::PaymentSetup("x".into()).kind(),
            ErrorKind::BadGateway
        );
        assert_eq!(
            DonationError::SessionAlreadyRecorded.kind(),
            ErrorKind::Conflict
        );
    }

    #[test]
    fn test_provider_message_surfaces() {
        let err = DonationError::PaymentSetup("No such payment intent".into());
        assert_eq!(err.to_app_error().message(), "No such payment intent");
        assert_eq!(err.to_app_error().status_code(), 502);
    }

    #[test]
    fn test_internal_stays_generic() {
        let err = DonationError::Internal("metadata parse blew up".into());
        assert_eq!(err.to_app_error().message(), "Internal server error.");
    }
}
