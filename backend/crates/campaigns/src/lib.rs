//! Campaigns (Campaign Registry) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Public browsing: paginated listing with case-insensitive search
//!   over title/description and exact category filtering
//! - Admin CRUD: create, partial update, hard delete
//! - Category index for the discovery UI
//!
//! The running `raised_amount` total is owned by the donation ledger;
//! this crate only reads it back.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::repository::CampaignRepository;
pub use error::{CampaignError, CampaignResult};
pub use infra::postgres::PgCampaignRepository;
pub use presentation::router::campaign_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
