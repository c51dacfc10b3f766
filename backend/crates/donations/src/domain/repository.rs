//! Repository Trait
//!
//! Interface for the donation ledger. The ledger owns the campaign
//! raised-amount increment: completing a donation and applying the
//! increment are a single atomic operation at this boundary.

use kernel::amount::Amount;
use kernel::id::{CampaignId, DonationId, UserId};

use crate::domain::entities::{AdminDonation, Donation, DonationWithCampaign, PlatformStats};
use crate::error::DonationResult;

/// Donation ledger trait
#[trait_variant::make(DonationRepository: Send)]
pub trait LocalDonationRepository {
    /// Record a donation attempt in the pending state
    async fn create_pending(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
        amount: Amount,
    ) -> DonationResult<Donation>;

    /// Mark a pending donation completed and apply the raised-amount
    /// increment, atomically
    async fn complete(
        &self,
        donation_id: DonationId,
        campaign_id: CampaignId,
        amount: Amount,
    ) -> DonationResult<Donation>;

    /// Insert an already-completed donation tagged with its checkout
    /// session id and apply the raised-amount increment, atomically.
    ///
    /// Fails with [`crate::error::DonationError::SessionAlreadyRecorded`]
    /// when the session id is already in the ledger.
    async fn create_completed_with_session(
        &self,
        user_id: UserId,
        campaign_id: CampaignId,
        amount: Amount,
        session_id: &str,
    ) -> DonationResult<Donation>;

    /// Look up the donation recorded for a checkout session, if any
    async fn find_by_session_id(&self, session_id: &str) -> DonationResult<Option<Donation>>;

    /// A user's donations, newest first, with campaign titles
    async fn list_by_user(&self, user_id: UserId) -> DonationResult<Vec<DonationWithCampaign>>;

    /// Every donation with donor and campaign info, newest first
    async fn list_all_detailed(&self) -> DonationResult<Vec<AdminDonation>>;

    /// Platform-wide aggregates (four concurrent point-in-time reads)
    async fn platform_stats(&self) -> DonationResult<PlatformStats>;
}
