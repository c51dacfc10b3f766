//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Missing fields default to empty strings so presence checks live in
/// one place (the use case), matching the wire contract.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Requested role; ignored except for logging the downgrade
    #[serde(default)]
    pub role: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Shared response payload
// ============================================================================

/// Public user representation (never carries the password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.code().to_string(),
            created_at: user.created_at,
        }
    }
}

/// Auth response payload: the user plus a signed bearer token
#[derive(Debug, Clone, Serialize)]
pub struct AuthPayload {
    pub user: UserDto,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;
    use kernel::id::Id;

    #[test]
    fn test_user_dto_excludes_credential() {
        let user = User {
            id: Id::new(3),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            role: UserRole::Donor,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(UserDto::from(&user)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["role"], "donor");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_register_request_defaults() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_empty());
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
        assert!(req.role.is_none());
    }
}
