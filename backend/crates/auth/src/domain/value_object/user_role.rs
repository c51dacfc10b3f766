use serde::{Deserialize, Serialize};
use std::fmt;

/// User role stored as a lowercase text code.
///
/// Registration always produces `Donor`; `Admin` is granted by an
/// operator directly in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Donor,
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Donor => "donor",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Decode a stored role code; unknown codes fall back to Donor.
    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code {
            "admin" => UserRole::Admin,
            "donor" => UserRole::Donor,
            other => {
                tracing::error!(code = %other, "Unknown user role code, treating as donor");
                UserRole::Donor
            }
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_codes() {
        assert_eq!(UserRole::Donor.code(), "donor");
        assert_eq!(UserRole::Admin.code(), "admin");
        assert_eq!(UserRole::from_code("donor"), UserRole::Donor);
        assert_eq!(UserRole::from_code("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_code("garbage"), UserRole::Donor);
    }

    #[test]
    fn test_user_role_checks() {
        assert!(!UserRole::Donor.is_admin());
        assert!(UserRole::Admin.is_admin());
    }

    #[test]
    fn test_user_role_serde() {
        assert_eq!(serde_json::to_string(&UserRole::Donor).unwrap(), "\"donor\"");
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
