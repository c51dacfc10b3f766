//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User, UserWithCredential};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user; id and timestamp are assigned by storage
    async fn create(&self, new_user: &NewUser) -> AuthResult<User>;

    /// Find a user (with stored credential) by exact email match
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<UserWithCredential>>;
}
