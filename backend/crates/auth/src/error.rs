//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request validation failed (message is user-facing)
    #[error("{0}")]
    Validation(String),

    /// Email already registered
    #[error("A user with this email already exists.")]
    EmailTaken,

    /// Unknown email or wrong password (deliberately indistinct)
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// No Authorization header on a protected route
    #[error("Access denied. No token provided.")]
    MissingToken,

    /// Authorization header present but empty
    #[error("Access denied. Invalid token format.")]
    InvalidTokenFormat,

    /// Token signature valid but past its expiry
    #[error("Token has expired.")]
    TokenExpired,

    /// Token malformed or signature mismatch
    #[error("Invalid token.")]
    TokenInvalid,

    /// Role check ran without a verified claim
    #[error("Authentication required.")]
    Unauthenticated,

    /// Verified claim does not carry the admin role
    #[error("Access denied. Admin privileges required.")]
    AdminRequired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidTokenFormat
            | AuthError::TokenExpired
            | AuthError::TokenInvalid
            | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::AdminRequired => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
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

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
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
            AuthError::Validation("bad".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(AuthError::EmailTaken.kind(), ErrorKind::Conflict);
        assert_eq!(
            AuthError::InvalidCredentials.kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(AuthError::TokenExpired.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::AdminRequired.kind(), ErrorKind::Forbidden);
        assert_eq!(
            AuthError::Internal("x".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_server_errors_stay_generic() {
        let err = AuthError::Internal("connection pool details".into());
        assert_eq!(err.to_app_error().message(), "Internal server error.");

        let err = AuthError::EmailTaken;
        assert_eq!(
            err.to_app_error().message(),
            "A user with this email already exists."
        );
    }

    #[test]
    fn test_expired_and_invalid_tokens_are_distinct() {
        assert_ne!(
            AuthError::TokenExpired.to_string(),
            AuthError::TokenInvalid.to_string()
        );
    }
}
