//! Login Use Case
//!
//! Authenticates a user by email + password and issues a signed token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credential;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::RawPassword;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required.".to_string(),
            ));
        }

        // Unknown email and wrong password must be indistinguishable
        // to the caller (no user enumeration).
        let stored = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !stored.password.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = credential::issue_token(&self.config, &stored.user)?;

        tracing::info!(user_id = %stored.user.id, "User signed in");

        Ok(LoginOutput {
            user: stored.user,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::InMemoryUserRepository;

    async fn registered() -> (Arc<AuthConfig>, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::with_random_secret());

        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(RegisterInput {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "secret123".to_string(),
                requested_role: None,
            })
            .await
            .unwrap();

        (config, repo)
    }

    #[tokio::test]
    async fn test_login_success() {
        let (config, repo) = registered().await;
        let use_case = LoginUseCase::new(repo, config.clone());

        let output = use_case
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();

        let claim = credential::verify_token(&config, &output.token).unwrap();
        assert_eq!(claim.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_look_identical() {
        let (config, repo) = registered().await;
        let use_case = LoginUseCase::new(repo, config);

        let unknown = use_case
            .execute(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap_err();

        let wrong = use_case
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let (config, repo) = registered().await;
        let use_case = LoginUseCase::new(repo, config);

        let err = use_case
            .execute(LoginInput {
                email: "".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }
}
