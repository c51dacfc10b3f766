//! Delete Campaign Use Case (admin only)
//!
//! Hard delete. Campaigns with recorded donations are protected by the
//! ledger's foreign key and surface as a conflict.

use std::sync::Arc;

use kernel::id::CampaignId;

use crate::domain::repository::CampaignRepository;
use crate::error::{CampaignError, CampaignResult};

/// Delete campaign use case
pub struct DeleteCampaignUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCampaignUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: CampaignId) -> CampaignResult<()> {
        if !self.repo.delete(id).await? {
            return Err(CampaignError::NotFound);
        }

        tracing::info!(campaign_id = %id, "Campaign deleted");

        Ok(())
    }
}
