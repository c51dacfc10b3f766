//! Register Use Case
//!
//! Creates a new donor account and issues a signed token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credential;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Role from the request body; anything but "donor" is downgraded
    pub requested_role: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user: User,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        if input.name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(AuthError::Validation(
                "Name, email, and password are required.".to_string(),
            ));
        }

        let email = Email::new(input.email)
            .map_err(|_| AuthError::Validation("Invalid email format.".to_string()))?;

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Exact-match lookup; email is stored and compared case-sensitively
        if self.repo.find_by_email(email.as_str()).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Registration-time privilege-escalation guard: the requested role
        // is ignored and every new account starts as a donor.
        if matches!(input.requested_role.as_deref(), Some("admin")) {
            tracing::warn!(email = %email, "Admin role requested at registration, downgrading to donor");
        }

        let new_user = NewUser {
            name: input.name.trim().to_string(),
            email,
            password,
            role: UserRole::Donor,
        };

        let user = self.repo.create(&new_user).await?;
        let token = credential::issue_token(&self.config, &user)?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(RegisterOutput { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryUserRepository;

    fn use_case() -> (Arc<InMemoryUserRepository>, RegisterUseCase<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::with_random_secret());
        (repo.clone(), RegisterUseCase::new(repo, config))
    }

    fn input(email: &str, role: Option<&str>) -> RegisterInput {
        RegisterInput {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
            requested_role: role.map(|r| r.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_creates_donor() {
        let (_, use_case) = use_case();
        let output = use_case.execute(input("alice@example.com", None)).await.unwrap();

        assert_eq!(output.user.role, UserRole::Donor);
        assert_eq!(output.user.email, "alice@example.com");
        assert!(!output.token.is_empty());
    }

    #[tokio::test]
    async fn test_requested_admin_role_is_downgraded() {
        let (_, use_case) = use_case();
        let output = use_case
            .execute(input("alice@example.com", Some("admin")))
            .await
            .unwrap();

        assert_eq!(output.user.role, UserRole::Donor);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (_, use_case) = use_case();
        use_case.execute(input("alice@example.com", None)).await.unwrap();

        let err = use_case
            .execute(input("alice@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let (_, use_case) = use_case();
        use_case.execute(input("alice@example.com", None)).await.unwrap();

        // Different casing registers a second, distinct account
        assert!(use_case.execute(input("Alice@example.com", None)).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let (_, use_case) = use_case();

        let err = use_case
            .execute(RegisterInput {
                name: "".to_string(),
                email: "alice@example.com".to_string(),
                password: "secret123".to_string(),
                requested_role: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let (_, use_case) = use_case();
        let err = use_case.execute(input("not-an-email", None)).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Invalid email format."));
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let (_, use_case) = use_case();
        let err = use_case
            .execute(RegisterInput {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "12345".to_string(),
                requested_role: None,
            })
            .await
            .unwrap_err();
        assert!(
            matches!(err, AuthError::Validation(ref m) if m == "Password must be at least 6 characters long.")
        );
    }
}
