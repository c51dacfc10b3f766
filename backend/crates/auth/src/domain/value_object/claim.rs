//! Claim Value Object
//!
//! The decoded identity payload carried inside a verified bearer token.
//! Downstream authorization checks and handlers read this; it is only
//! ever constructed by token issuance and verification.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use super::user_role::UserRole;

/// Verified token claims: `{id, email, role}` plus expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// User database identifier
    pub id: UserId,
    /// Email as registered
    pub email: String,
    /// Role at issuance time
    pub role: UserRole,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl Claim {
    /// Whether the claim has passed its expiry at `now` (unix seconds)
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    #[test]
    fn test_claim_serde_shape() {
        let claim = Claim {
            id: Id::new(7),
            email: "donor@example.com".to_string(),
            role: UserRole::Donor,
            exp: 1_700_000_000,
        };
        let json = serde_json::to_value(&claim).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["email"], "donor@example.com");
        assert_eq!(json["role"], "donor");
        assert_eq!(json["exp"], 1_700_000_000_i64);
    }

    #[test]
    fn test_claim_expiry() {
        let claim = Claim {
            id: Id::new(1),
            email: "a@b.co".to_string(),
            role: UserRole::Admin,
            exp: 100,
        };
        assert!(!claim.is_expired_at(99));
        assert!(claim.is_expired_at(100));
        assert!(claim.is_expired_at(101));
    }
}
