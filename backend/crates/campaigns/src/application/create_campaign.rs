//! Create Campaign Use Case (admin only)

use std::sync::Arc;

use crate::domain::entities::Campaign;
use crate::domain::repository::CampaignRepository;
use crate::domain::value_objects::CampaignDraft;
use crate::error::CampaignResult;

/// Create campaign use case
pub struct CreateCampaignUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCampaignUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: CampaignDraft) -> CampaignResult<Campaign> {
        let campaign = self.repo.create(&draft).await?;

        tracing::info!(campaign_id = %campaign.id, title = %campaign.title, "Campaign created");

        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryCampaignRepository;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_create_starts_with_zero_raised() {
        let repo = Arc::new(InMemoryCampaignRepository::new());
        let use_case = CreateCampaignUseCase::new(repo);

        let draft = CampaignDraft::new(
            "Clean Water".to_string(),
            Some("Wells for rural villages".to_string()),
            Some(Decimal::from(1000)),
            None,
            Some("health".to_string()),
        )
        .unwrap();

        let campaign = use_case.execute(draft).await.unwrap();
        assert_eq!(campaign.raised_amount, Decimal::ZERO);
        assert_eq!(campaign.goal_amount, Decimal::from(1000));
    }
}
