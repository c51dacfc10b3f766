//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{CampaignId, DonationId, UserId};
use rust_decimal::Decimal;

use super::value_objects::PaymentStatus;

/// Donation entity
///
/// `stripe_session_id` is set only on the reconciliation path; its
/// uniqueness backs the replay guard.
#[derive(Debug, Clone)]
pub struct Donation {
    pub id: DonationId,
    pub user_id: UserId,
    pub campaign_id: CampaignId,
    pub amount: Decimal,
    pub payment_status: PaymentStatus,
    pub stripe_session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Donation joined with its campaign title (donor history view)
#[derive(Debug, Clone)]
pub struct DonationWithCampaign {
    pub id: DonationId,
    pub amount: Decimal,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub campaign_id: CampaignId,
    pub campaign_title: String,
}

/// Donation joined with donor and campaign info (admin view)
#[derive(Debug, Clone)]
pub struct AdminDonation {
    pub id: DonationId,
    pub amount: Decimal,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
    pub donor_name: String,
    pub donor_email: String,
    pub campaign_id: CampaignId,
    pub campaign_title: String,
}

/// Platform-wide aggregates
///
/// Four independent point-in-time reads; not mutually consistent under
/// concurrent writes.
#[derive(Debug, Clone)]
pub struct PlatformStats {
    pub total_raised: Decimal,
    pub total_donors: i64,
    pub total_campaigns: i64,
    pub total_donations: i64,
}
