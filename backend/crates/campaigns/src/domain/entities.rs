//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::CampaignId;
use rust_decimal::Decimal;

/// Campaign entity
///
/// `raised_amount` is the running total of completed donations. It is
/// maintained incrementally by the donation ledger, never recomputed.
#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub description: Option<String>,
    pub goal_amount: Decimal,
    pub raised_amount: Decimal,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One page of a filtered campaign listing
#[derive(Debug, Clone)]
pub struct CampaignPage {
    pub campaigns: Vec<Campaign>,
    pub total: i64,
    pub total_pages: i64,
    pub current_page: i64,
}
