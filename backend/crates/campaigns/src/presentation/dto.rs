//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Campaign;

// ============================================================================
// Listing
// ============================================================================

/// Query parameters for GET /campaigns
///
/// `page`/`limit` arrive as strings; anything unparsable falls back to
/// the defaults (non-fatal).
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn page_as_i64(&self) -> Option<i64> {
        self.page.as_deref().and_then(|p| p.parse().ok())
    }

    pub fn limit_as_i64(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|l| l.parse().ok())
    }
}

// ============================================================================
// Campaign payload
// ============================================================================

/// Wire representation of a campaign
#[derive(Debug, Clone, Serialize)]
pub struct CampaignDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub goal_amount: Decimal,
    pub raised_amount: Decimal,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Campaign> for CampaignDto {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id.as_i64(),
            title: campaign.title,
            description: campaign.description,
            goal_amount: campaign.goal_amount,
            raised_amount: campaign.raised_amount,
            image_url: campaign.image_url,
            category: campaign.category,
            created_at: campaign.created_at,
        }
    }
}

// ============================================================================
// Create / update
// ============================================================================

/// Request for POST /campaigns
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaignRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub goal_amount: Option<Decimal>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// Request for PUT /campaigns/{id} (partial)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCampaignRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub goal_amount: Option<Decimal>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_paging_parse() {
        let q = ListQuery {
            search: None,
            category: None,
            page: Some("3".to_string()),
            limit: Some("abc".to_string()),
        };
        assert_eq!(q.page_as_i64(), Some(3));
        assert_eq!(q.limit_as_i64(), None);
    }

    #[test]
    fn test_campaign_dto_shape() {
        use kernel::id::Id;
        let campaign = Campaign {
            id: Id::new(5),
            title: "Clean Water".to_string(),
            description: None,
            goal_amount: Decimal::from(1000),
            raised_amount: Decimal::from(250),
            image_url: Some("/uploads/abc.png".to_string()),
            category: Some("health".to_string()),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(CampaignDto::from(campaign)).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["goal_amount"], "1000");
        assert_eq!(json["raised_amount"], "250");
        assert_eq!(json["image_url"], "/uploads/abc.png");
    }
}
