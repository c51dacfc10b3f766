//! Campaign Router
//!
//! Browsing is public; create/update/delete sit behind the auth + admin
//! gates from the auth crate.

use auth::presentation::middleware::{AuthGateState, require_admin, require_auth};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::infra::postgres::PgCampaignRepository;
use crate::presentation::handlers::{self, CampaignAppState};

/// Create the Campaign router with PostgreSQL repository
pub fn campaign_router(repo: PgCampaignRepository, gate: AuthGateState) -> Router {
    let state = CampaignAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/", get(handlers::list::<PgCampaignRepository>))
        .route(
            "/categories",
            get(handlers::categories::<PgCampaignRepository>),
        )
        .route("/{id}", get(handlers::get_by_id::<PgCampaignRepository>));

    let admin = Router::new()
        .route("/", post(handlers::create::<PgCampaignRepository>))
        .route(
            "/{id}",
            put(handlers::update::<PgCampaignRepository>)
                .delete(handlers::delete_campaign::<PgCampaignRepository>),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(gate, require_auth));

    public.merge(admin).with_state(state)
}
