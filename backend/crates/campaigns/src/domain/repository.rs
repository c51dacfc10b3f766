//! Repository Trait
//!
//! Interface for campaign persistence. Implementation is in infrastructure layer.

use kernel::id::CampaignId;

use crate::domain::entities::{Campaign, CampaignPage};
use crate::domain::value_objects::{CampaignDraft, CampaignFilter, CampaignPatch};
use crate::error::CampaignResult;

/// Campaign repository trait
#[trait_variant::make(CampaignRepository: Send)]
pub trait LocalCampaignRepository {
    /// Filtered, paginated listing ordered by creation time descending
    async fn list(&self, filter: &CampaignFilter) -> CampaignResult<CampaignPage>;

    /// Find a campaign by id
    async fn find_by_id(&self, id: CampaignId) -> CampaignResult<Option<Campaign>>;

    /// Create a campaign; raised_amount starts at zero
    async fn create(&self, draft: &CampaignDraft) -> CampaignResult<Campaign>;

    /// Partial update; returns `None` when the id does not exist
    async fn update(&self, id: CampaignId, patch: &CampaignPatch)
    -> CampaignResult<Option<Campaign>>;

    /// Hard delete; returns `false` when the id does not exist
    async fn delete(&self, id: CampaignId) -> CampaignResult<bool>;

    /// Distinct non-empty categories, alphabetically ordered
    async fn categories(&self) -> CampaignResult<Vec<String>>;
}
