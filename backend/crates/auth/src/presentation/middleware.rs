//! Auth Middleware
//!
//! Bearer-token gates for protected routes. `require_auth` verifies the
//! token and stashes the decoded [`Claim`] in request extensions;
//! `require_admin` must run after it.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credential;
use crate::domain::value_object::claim::Claim;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub config: Arc<AuthConfig>,
}

impl AuthGateState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Middleware that requires a valid bearer token
///
/// On success the verified [`Claim`] is inserted into request extensions
/// for downstream handlers and role checks.
pub async fn require_auth(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AuthError::MissingToken.into_response())?;

    // "Bearer <token>" or the raw token
    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    if token.is_empty() {
        return Err(AuthError::InvalidTokenFormat.into_response());
    }

    let claim = credential::verify_token(&state.config, token)
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(claim);

    Ok(next.run(req).await)
}

/// Middleware that requires the admin role
///
/// Must run after [`require_auth`]; a missing claim is an
/// authentication failure, a non-admin claim an authorization failure.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, Response> {
    let claim = req
        .extensions()
        .get::<Claim>()
        .ok_or_else(|| AuthError::Unauthenticated.into_response())?;

    if !claim.role.is_admin() {
        return Err(AuthError::AdminRequired.into_response());
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::credential;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::user_role::UserRole;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use chrono::Utc;
    use kernel::id::Id;
    use tower::ServiceExt;

    fn admin_gated_app(config: Arc<AuthConfig>) -> Router {
        let gate = AuthGateState::new(config);
        Router::new()
            .route("/admin-only", get(|| async { "ok" }))
            .route_layer(axum::middleware::from_fn(require_admin))
            .route_layer(axum::middleware::from_fn_with_state(gate, require_auth))
    }

    fn token_for(config: &AuthConfig, role: UserRole) -> String {
        let user = User {
            id: Id::new(1),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            role,
            created_at: Utc::now(),
        };
        credential::issue_token(config, &user).unwrap()
    }

    fn request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/admin-only");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_admin_gate_matrix() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let app = admin_gated_app(config.clone());

        // No token: authentication failure
        let response = app.clone().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // Garbage token: authentication failure
        let response = app
            .clone()
            .oneshot(request(Some("invalid.token.here")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        // Valid donor token: authorization failure
        let donor = token_for(&config, UserRole::Donor);
        let response = app.clone().oneshot(request(Some(&donor))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        // Valid admin token: both gates pass
        let admin = token_for(&config, UserRole::Admin);
        let response = app.oneshot(request(Some(&admin))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
