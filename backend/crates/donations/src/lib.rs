//! Donations (Donation Ledger + Payment Reconciliation) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and provider traits
//! - `application/` - Use cases
//! - `infra/` - Database implementation and the Stripe Checkout client
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Consistency Model
//! - A campaign's `raised_amount` is the sum of its completed donations,
//!   maintained by an additive storage-level increment at completion time
//! - Marking a donation completed and applying the increment happen in a
//!   single database transaction
//! - Reconciliation is idempotent per checkout session: the unique
//!   session id means a replayed verification returns the already
//!   recorded donation without a second increment
//! - The direct (non-checkout) donation path carries no idempotency
//!   guard; a retried request records a second donation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PaymentConfig;
pub use domain::provider::CheckoutProvider;
pub use domain::repository::DonationRepository;
pub use error::{DonationError, DonationResult};
pub use infra::postgres::PgDonationRepository;
pub use infra::stripe::StripeCheckout;
pub use presentation::router::{
    admin_router, donation_app_state, donation_router, stripe_router,
};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
