//! Auth (Identity & Access) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - User registration/login with email + password
//! - Role-based access (Donor, Admin)
//! - Stateless signed bearer tokens (24-hour validity)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Tokens are HMAC-SHA256-signed claim payloads; no server-side
//!   session store and no pre-expiry revocation
//! - Registration can only produce the Donor role; Admin is granted
//!   out-of-band directly in storage

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthGateState, require_admin, require_auth};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
