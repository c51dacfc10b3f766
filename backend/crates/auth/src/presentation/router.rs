//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: Arc<AuthConfig>) -> Router {
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/register", post(handlers::register::<PgUserRepository>))
        .route("/login", post(handlers::login::<PgUserRepository>))
        .with_state(state)
}
