//! In-memory repository for use-case tests

use std::sync::Mutex;

use chrono::Utc;
use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User, UserWithCredential};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// Vec-backed user store with the same exact-match email semantics as
/// the PostgreSQL implementation.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserWithCredential>>,
    next_id: Mutex<i64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: &NewUser) -> AuthResult<User> {
        let mut next_id = self.next_id.lock().unwrap();
        let user = User {
            id: UserId::new(*next_id),
            name: new_user.name.clone(),
            email: new_user.email.as_str().to_string(),
            role: new_user.role,
            created_at: Utc::now(),
        };
        *next_id += 1;

        self.users.lock().unwrap().push(UserWithCredential {
            user: user.clone(),
            password: new_user.password.clone(),
        });

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<UserWithCredential>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|stored| stored.user.email == email)
            .cloned())
    }
}
