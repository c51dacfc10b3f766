//! List Campaigns Use Case
//!
//! Paginated, filtered public listing.

use std::sync::Arc;

use crate::domain::entities::CampaignPage;
use crate::domain::repository::CampaignRepository;
use crate::domain::value_objects::CampaignFilter;
use crate::error::CampaignResult;

/// List campaigns use case
pub struct ListCampaignsUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> ListCampaignsUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: CampaignFilter) -> CampaignResult<CampaignPage> {
        self.repo.list(&filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryCampaignRepository;

    #[tokio::test]
    async fn test_category_all_equals_no_filter() {
        let repo = Arc::new(InMemoryCampaignRepository::with_seed_data());
        let use_case = ListCampaignsUseCase::new(repo);

        let unfiltered = use_case
            .execute(CampaignFilter::new(None, None, None, None))
            .await
            .unwrap();
        let all = use_case
            .execute(CampaignFilter::new(None, Some("all".to_string()), None, None))
            .await
            .unwrap();

        assert_eq!(unfiltered.total, all.total);
    }

    #[tokio::test]
    async fn test_search_matches_title_or_description_case_insensitively() {
        let repo = Arc::new(InMemoryCampaignRepository::with_seed_data());
        let use_case = ListCampaignsUseCase::new(repo);

        // "WATER" appears in the title of one seed campaign
        let by_title = use_case
            .execute(CampaignFilter::new(Some("WATER".to_string()), None, None, None))
            .await
            .unwrap();
        assert_eq!(by_title.total, 1);

        // "rebuild" appears only in a description
        let by_description = use_case
            .execute(CampaignFilter::new(Some("rebuild".to_string()), None, None, None))
            .await
            .unwrap();
        assert_eq!(by_description.total, 1);
    }

    #[tokio::test]
    async fn test_pagination_math() {
        let repo = Arc::new(InMemoryCampaignRepository::with_seed_data());
        let use_case = ListCampaignsUseCase::new(repo);

        let page = use_case
            .execute(CampaignFilter::new(None, None, Some(1), Some(2)))
            .await
            .unwrap();

        assert_eq!(page.campaigns.len(), 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 1);

        let last = use_case
            .execute(CampaignFilter::new(None, None, Some(2), Some(2)))
            .await
            .unwrap();
        assert_eq!(last.campaigns.len(), 1);
    }
}
