//! Domain Layer

pub mod entities;
pub mod provider;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{AdminDonation, Donation, DonationWithCampaign, PlatformStats};
pub use provider::{CheckoutProvider, CheckoutSession, CheckoutSessionRequest, SessionMetadata};
pub use repository::DonationRepository;
pub use value_objects::PaymentStatus;
