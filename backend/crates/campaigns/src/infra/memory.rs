//! In-memory repository for use-case tests
//!
//! Mirrors the PostgreSQL implementation's filter semantics: substring
//! search over title OR description (case-insensitive), exact category
//! match, newest-first ordering.

use std::sync::Mutex;

use chrono::{Duration, Utc};
use kernel::id::CampaignId;
use rust_decimal::Decimal;

use crate::domain::entities::{Campaign, CampaignPage};
use crate::domain::repository::CampaignRepository;
use crate::domain::value_objects::{CampaignDraft, CampaignFilter, CampaignPatch};
use crate::error::CampaignResult;

pub struct InMemoryCampaignRepository {
    campaigns: Mutex<Vec<Campaign>>,
    next_id: Mutex<i64>,
}

impl InMemoryCampaignRepository {
    pub fn new() -> Self {
        Self {
            campaigns: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    /// Three campaigns with distinct creation times (id 3 is newest)
    pub fn with_seed_data() -> Self {
        let now = Utc::now();
        let seed = |id: i64, title: &str, description: Option<&str>, category: &str| Campaign {
            id: CampaignId::new(id),
            title: title.to_string(),
            description: description.map(String::from),
            goal_amount: Decimal::from(1000),
            raised_amount: Decimal::ZERO,
            image_url: None,
            category: Some(category.to_string()),
            created_at: now - Duration::seconds(100 - id),
        };

        Self {
            campaigns: Mutex::new(vec![
                seed(
                    1,
                    "Clean Water Initiative",
                    Some("Wells for rural villages"),
                    "health",
                ),
                seed(
                    2,
                    "School Supplies",
                    Some("Help rebuild classrooms after the storm"),
                    "disaster-relief",
                ),
                seed(3, "Community Food Bank", None, "health"),
            ]),
            next_id: Mutex::new(4),
        }
    }

    /// Test helper: fetch a campaign that is known to exist
    pub fn get(&self, id: i64) -> Campaign {
        self.find(id).expect("seeded campaign missing")
    }

    /// Test helper: fetch a campaign by raw id
    pub fn find(&self, id: i64) -> Option<Campaign> {
        self.campaigns
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id.as_i64() == id)
            .cloned()
    }

    fn matches(campaign: &Campaign, filter: &CampaignFilter) -> bool {
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            let in_title = campaign.title.to_lowercase().contains(&needle);
            let in_description = campaign
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }

        if let Some(category) = &filter.category {
            if campaign.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        true
    }
}

impl CampaignRepository for InMemoryCampaignRepository {
    async fn list(&self, filter: &CampaignFilter) -> CampaignResult<CampaignPage> {
        let campaigns = self.campaigns.lock().unwrap();

        let mut matching: Vec<Campaign> = campaigns
            .iter()
            .filter(|c| Self::matches(c, filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as i64;
        let page_items: Vec<Campaign> = matching
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.limit as usize)
            .collect();

        Ok(CampaignPage {
            campaigns: page_items,
            total,
            total_pages: filter.total_pages(total),
            current_page: filter.page,
        })
    }

    async fn find_by_id(&self, id: CampaignId) -> CampaignResult<Option<Campaign>> {
        Ok(self.find(id.as_i64()))
    }

    async fn create(&self, draft: &CampaignDraft) -> CampaignResult<Campaign> {
        let mut next_id = self.next_id.lock().unwrap();
        let campaign = Campaign {
            id: CampaignId::new(*next_id),
            title: draft.title.clone(),
            description: draft.description.clone(),
            goal_amount: draft.goal_amount.as_decimal(),
            raised_amount: Decimal::ZERO,
            image_url: draft.image_url.clone(),
            category: draft.category.clone(),
            created_at: Utc::now(),
        };
        *next_id += 1;

        self.campaigns.lock().unwrap().push(campaign.clone());
        Ok(campaign)
    }

    async fn update(
        &self,
        id: CampaignId,
        patch: &CampaignPatch,
    ) -> CampaignResult<Option<Campaign>> {
        let mut campaigns = self.campaigns.lock().unwrap();
        let Some(campaign) = campaigns.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &patch.title {
            campaign.title = title.clone();
        }
        if let Some(description) = &patch.description {
            campaign.description = Some(description.clone());
        }
        if let Some(goal) = patch.goal_amount {
            campaign.goal_amount = goal.as_decimal();
        }
        if let Some(image_url) = &patch.image_url {
            campaign.image_url = Some(image_url.clone());
        }
        if let Some(category) = &patch.category {
            campaign.category = Some(category.clone());
        }

        Ok(Some(campaign.clone()))
    }

    async fn delete(&self, id: CampaignId) -> CampaignResult<bool> {
        let mut campaigns = self.campaigns.lock().unwrap();
        let before = campaigns.len();
        campaigns.retain(|c| c.id != id);
        Ok(campaigns.len() < before)
    }

    async fn categories(&self) -> CampaignResult<Vec<String>> {
        let campaigns = self.campaigns.lock().unwrap();
        let mut categories: Vec<String> = campaigns
            .iter()
            .filter_map(|c| c.category.clone())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}
