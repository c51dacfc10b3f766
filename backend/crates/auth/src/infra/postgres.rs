//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User, UserWithCredential};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_password::UserPassword, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role, created_at
            "#,
        )
        .bind(&new_user.name)
        .bind(new_user.email.as_str())
        .bind(new_user.password.as_phc_string())
        .bind(new_user.role.code())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // Unique violation: a concurrent registration won the race
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AuthError::EmailTaken
            }
            _ => AuthError::Database(e),
        })?;

        Ok(row.into_user())
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<UserWithCredential>> {
        let row = sqlx::query_as::<_, UserCredentialRow>(
            r#"
            SELECT id, name, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user_with_credential()).transpose()
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
            role: UserRole::from_code(&self.role),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserCredentialRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserCredentialRow {
    fn into_user_with_credential(self) -> AuthResult<UserWithCredential> {
        let password = UserPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(UserWithCredential {
            user: User {
                id: UserId::new(self.id),
                name: self.name,
                email: self.email,
                role: UserRole::from_code(&self.role),
                created_at: self.created_at,
            },
            password,
        })
    }
}
