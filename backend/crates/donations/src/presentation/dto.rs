//! API DTOs (Data Transfer Objects)
//!
//! Field naming follows the wire contract: ledger rows use snake_case,
//! the checkout endpoints and the stats payload use camelCase.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AdminDonation, Donation, DonationWithCampaign, PlatformStats};

// ============================================================================
// Direct donation
// ============================================================================

/// Request for POST /donations
#[derive(Debug, Clone, Deserialize)]
pub struct DonateRequest {
    pub campaign_id: Option<i64>,
    pub amount: Option<Decimal>,
}

/// Receipt payload for a processed direct donation
#[derive(Debug, Clone, Serialize)]
pub struct DonationReceiptDto {
    pub donation_id: i64,
    pub amount: Decimal,
    pub campaign_id: i64,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Donation> for DonationReceiptDto {
    fn from(donation: &Donation) -> Self {
        Self {
            donation_id: donation.id.as_i64(),
            amount: donation.amount,
            campaign_id: donation.campaign_id.as_i64(),
            payment_status: donation.payment_status.code().to_string(),
            created_at: donation.created_at,
        }
    }
}

/// Full donation payload (reconciliation response)
#[derive(Debug, Clone, Serialize)]
pub struct DonationDto {
    pub id: i64,
    pub user_id: i64,
    pub campaign_id: i64,
    pub amount: Decimal,
    pub payment_status: String,
    pub stripe_session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Donation> for DonationDto {
    fn from(donation: &Donation) -> Self {
        Self {
            id: donation.id.as_i64(),
            user_id: donation.user_id.as_i64(),
            campaign_id: donation.campaign_id.as_i64(),
            amount: donation.amount,
            payment_status: donation.payment_status.code().to_string(),
            stripe_session_id: donation.stripe_session_id.clone(),
            created_at: donation.created_at,
        }
    }
}

// ============================================================================
// Donation history
// ============================================================================

/// A donor's own donation, with the campaign title
#[derive(Debug, Clone, Serialize)]
pub struct MyDonationDto {
    pub id: i64,
    pub amount: Decimal,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub campaign_id: i64,
    pub campaign_title: String,
}

impl From<DonationWithCampaign> for MyDonationDto {
    fn from(d: DonationWithCampaign) -> Self {
        Self {
            id: d.id.as_i64(),
            amount: d.amount,
            payment_status: d.payment_status.code().to_string(),
            created_at: d.created_at,
            campaign_id: d.campaign_id.as_i64(),
            campaign_title: d.campaign_title,
        }
    }
}

// ============================================================================
// Checkout
// ============================================================================

/// Request for POST /stripe/create-checkout-session
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub amount: Option<Decimal>,
    pub campaign_id: Option<i64>,
    pub campaign_title: Option<String>,
}

/// Response payload with the hosted checkout redirect
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub session_id: String,
    pub url: Option<String>,
}

/// Request for POST /stripe/verify-donation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub session_id: Option<String>,
}

// ============================================================================
// Admin reporting
// ============================================================================

/// Platform statistics payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_raised: Decimal,
    pub total_donors: i64,
    pub total_campaigns: i64,
    pub total_donations: i64,
}

impl From<PlatformStats> for StatsDto {
    fn from(stats: PlatformStats) -> Self {
        Self {
            total_raised: stats.total_raised,
            total_donors: stats.total_donors,
            total_campaigns: stats.total_campaigns,
            total_donations: stats.total_donations,
        }
    }
}

/// Admin view of a donation with donor and campaign info
#[derive(Debug, Clone, Serialize)]
pub struct AdminDonationDto {
    pub id: i64,
    pub amount: Decimal,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub donor_name: String,
    pub donor_email: String,
    pub campaign_id: i64,
    pub campaign_title: String,
}

impl From<AdminDonation> for AdminDonationDto {
    fn from(d: AdminDonation) -> Self {
        Self {
            id: d.id.as_i64(),
            amount: d.amount,
            payment_status: d.payment_status.code().to_string(),
            created_at: d.created_at,
            user_id: d.user_id.as_i64(),
            donor_name: d.donor_name,
            donor_email: d.donor_email,
            campaign_id: d.campaign_id.as_i64(),
            campaign_title: d.campaign_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_request_is_camel_case() {
        let req: CheckoutRequest = serde_json::from_str(
            r#"{"amount": 25, "campaignId": 3, "campaignTitle": "Clean Water"}"#,
        )
        .unwrap();
        assert_eq!(req.campaign_id, Some(3));
        assert_eq!(req.campaign_title.as_deref(), Some("Clean Water"));
    }

    #[test]
    fn test_stats_dto_is_camel_case() {
        let json = serde_json::to_value(StatsDto {
            total_raised: Decimal::from(500),
            total_donors: 4,
            total_campaigns: 2,
            total_donations: 9,
        })
        .unwrap();
        assert_eq!(json["totalRaised"], "500");
        assert_eq!(json["totalDonors"], 4);
        assert_eq!(json["totalCampaigns"], 2);
        assert_eq!(json["totalDonations"], 9);
    }

    #[test]
    fn test_verify_request_accepts_missing_session_id() {
        let req: VerifyRequest = serde_json::from_str("{}").unwrap();
        assert!(req.session_id.is_none());
    }
}
