//! Domain Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal-status lifecycle of a donation attempt.
///
/// `Pending` transitions to `Completed` or `Failed`; terminal states are
/// never revisited in normal flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }

    /// Decode a stored status code; unknown codes are treated as failed.
    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => PaymentStatus::Pending,
            "completed" => PaymentStatus::Completed,
            "failed" => PaymentStatus::Failed,
            other => {
                tracing::error!(code = %other, "Unknown payment status code, treating as failed");
                PaymentStatus::Failed
            }
        }
    }

    #[inline]
    pub const fn is_completed(&self) -> bool {
        matches!(self, PaymentStatus::Completed)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_codes() {
        assert_eq!(PaymentStatus::Pending.code(), "pending");
        assert_eq!(PaymentStatus::Completed.code(), "completed");
        assert_eq!(PaymentStatus::Failed.code(), "failed");

        assert_eq!(PaymentStatus::from_code("pending"), PaymentStatus::Pending);
        assert_eq!(
            PaymentStatus::from_code("completed"),
            PaymentStatus::Completed
        );
        assert_eq!(PaymentStatus::from_code("failed"), PaymentStatus::Failed);
        assert_eq!(PaymentStatus::from_code("garbage"), PaymentStatus::Failed);
    }

    #[test]
    fn test_payment_status_serde() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
