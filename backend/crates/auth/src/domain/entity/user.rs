//! User Entity
//!
//! Core user profile entity. The password credential travels separately
//! so handlers can never serialize it by accident.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, user_password::UserPassword, user_role::UserRole,
};

/// User entity
///
/// Public profile information. Never carries the password credential.
#[derive(Debug, Clone)]
pub struct User {
    /// Database identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address, unique, stored exactly as registered
    pub email: String,
    /// Role (Donor, Admin)
    pub role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for user creation; the id and timestamp come from storage.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password: UserPassword,
    pub role: UserRole,
}

/// User together with the stored password credential (login lookup only)
#[derive(Debug, Clone)]
pub struct UserWithCredential {
    pub user: User,
    pub password: UserPassword,
}
