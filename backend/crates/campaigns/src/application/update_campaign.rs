//! Update Campaign Use Case (admin only)
//!
//! Partial update: absent fields are left unchanged.

use std::sync::Arc;

use kernel::id::CampaignId;

use crate::domain::entities::Campaign;
use crate::domain::repository::CampaignRepository;
use crate::domain::value_objects::CampaignPatch;
use crate::error::{CampaignError, CampaignResult};

/// Update campaign use case
pub struct UpdateCampaignUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateCampaignUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: CampaignId,
        patch: CampaignPatch,
    ) -> CampaignResult<Campaign> {
        let updated = self
            .repo
            .update(id, &patch)
            .await?
            .ok_or(CampaignError::NotFound)?;

        tracing::info!(campaign_id = %updated.id, "Campaign updated");

        Ok(updated)
    }
}
