//! Checkout Provider Port
//!
//! Interface to the external hosted-checkout provider. The production
//! implementation talks to the Stripe REST API; tests substitute a fake.

use kernel::amount::Amount;
use kernel::id::{CampaignId, UserId};

use crate::error::DonationResult;

/// Input for creating a hosted checkout session
#[derive(Debug, Clone)]
pub struct CheckoutSessionRequest {
    pub amount: Amount,
    pub campaign_id: CampaignId,
    /// Client-supplied display title; the provider only shows it
    pub campaign_title: Option<String>,
    pub user_id: UserId,
}

/// Metadata attached to a session at creation and read back at
/// verification time. Carried as strings, the provider's native format.
#[derive(Debug, Clone, Default)]
pub struct SessionMetadata {
    pub campaign_id: String,
    pub user_id: String,
    pub amount: String,
}

/// A provider-side checkout session
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub id: String,
    /// Redirect URL for the hosted payment page
    pub url: Option<String>,
    /// Provider-reported payment status; "paid" means settled
    pub payment_status: String,
    pub metadata: SessionMetadata,
}

impl CheckoutSession {
    /// Whether the provider reports this session as paid
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }
}

/// Checkout provider trait
#[trait_variant::make(CheckoutProvider: Send)]
pub trait LocalCheckoutProvider {
    /// Create a hosted checkout session denominated in the smallest
    /// currency unit, tagged with reconciliation metadata
    async fn create_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> DonationResult<CheckoutSession>;

    /// Retrieve a session's current state from the provider
    async fn retrieve_session(&self, session_id: &str) -> DonationResult<CheckoutSession>;
}
