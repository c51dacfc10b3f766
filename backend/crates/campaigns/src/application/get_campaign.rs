//! Get Campaign Use Case

use std::sync::Arc;

use kernel::id::CampaignId;

use crate::domain::entities::Campaign;
use crate::domain::repository::CampaignRepository;
use crate::error::{CampaignError, CampaignResult};

/// Get campaign by id use case
pub struct GetCampaignUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> GetCampaignUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: CampaignId) -> CampaignResult<Campaign> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CampaignError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryCampaignRepository;
    use kernel::id::Id;

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let repo = Arc::new(InMemoryCampaignRepository::with_seed_data());
        let use_case = GetCampaignUseCase::new(repo);

        let err = use_case.execute(Id::new(9999)).await.unwrap_err();
        assert!(matches!(err, CampaignError::NotFound));
    }

    #[tokio::test]
    async fn test_existing_id_returned() {
        let repo = Arc::new(InMemoryCampaignRepository::with_seed_data());
        let use_case = GetCampaignUseCase::new(repo);

        let campaign = use_case.execute(Id::new(1)).await.unwrap();
        assert_eq!(campaign.id.as_i64(), 1);
    }
}
