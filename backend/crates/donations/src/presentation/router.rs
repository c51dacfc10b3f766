//! Donation, Checkout, and Admin Routers

use auth::presentation::middleware::{AuthGateState, require_admin, require_auth};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use campaigns::infra::postgres::PgCampaignRepository;
use sqlx::PgPool;

use crate::application::config::PaymentConfig;
use crate::infra::postgres::PgDonationRepository;
use crate::infra::stripe::StripeCheckout;
use crate::presentation::handlers::{self, DonationAppState};

/// Production state: PostgreSQL ledger + Stripe provider
pub type PgDonationAppState =
    DonationAppState<PgDonationRepository, PgCampaignRepository, StripeCheckout>;

/// Build the shared state for the three routers below
pub fn donation_app_state(pool: PgPool, config: Arc<PaymentConfig>) -> PgDonationAppState {
    DonationAppState {
        donations: Arc::new(PgDonationRepository::new(pool.clone())),
        campaigns: Arc::new(PgCampaignRepository::new(pool)),
        provider: Arc::new(StripeCheckout::new(config)),
    }
}

/// /donations - direct donation path (authenticated)
pub fn donation_router(state: PgDonationAppState, gate: AuthGateState) -> Router {
    Router::new()
        .route(
            "/",
            post(
                handlers::process_donation::<
                    PgDonationRepository,
                    PgCampaignRepository,
                    StripeCheckout,
                >,
            ),
        )
        .route(
            "/my-donations",
            get(
                handlers::my_donations::<PgDonationRepository, PgCampaignRepository, StripeCheckout>,
            ),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth))
        .with_state(state)
}

/// /stripe - hosted checkout path (authenticated)
pub fn stripe_router(state: PgDonationAppState, gate: AuthGateState) -> Router {
    Router::new()
        .route(
            "/create-checkout-session",
            post(
                handlers::create_checkout_session::<
                    PgDonationRepository,
                    PgCampaignRepository,
                    StripeCheckout,
                >,
            ),
        )
        .route(
            "/verify-donation",
            post(
                handlers::verify_donation::<
                    PgDonationRepository,
                    PgCampaignRepository,
                    StripeCheckout,
                >,
            ),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth))
        .with_state(state)
}

/// /admin - reporting (admin only)
pub fn admin_router(state: PgDonationAppState, gate: AuthGateState) -> Router {
    Router::new()
        .route(
            "/stats",
            get(handlers::stats::<PgDonationRepository, PgCampaignRepository, StripeCheckout>),
        )
        .route(
            "/donations",
            get(
                handlers::all_donations::<PgDonationRepository, PgCampaignRepository, StripeCheckout>,
            ),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(gate, require_auth))
        .with_state(state)
}
