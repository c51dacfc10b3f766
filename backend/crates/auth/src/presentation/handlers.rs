//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::api::ApiResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{AuthPayload, LoginRequest, RegisterRequest, UserDto};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
            requested_role: req.role,
        })
        .await?;

    let payload = AuthPayload {
        user: UserDto::from(&output.user),
        token: output.token,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            "User registered successfully.",
            payload,
        )),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let payload = AuthPayload {
        user: UserDto::from(&output.user),
        token: output.token,
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with_message("Login successful.", payload)),
    ))
}
