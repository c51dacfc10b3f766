//! List Categories Use Case

use std::sync::Arc;

use crate::domain::repository::CampaignRepository;
use crate::error::CampaignResult;

/// List categories use case
pub struct ListCategoriesUseCase<R>
where
    R: CampaignRepository,
{
    repo: Arc<R>,
}

impl<R> ListCategoriesUseCase<R>
where
    R: CampaignRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CampaignResult<Vec<String>> {
        self.repo.categories().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryCampaignRepository;

    #[tokio::test]
    async fn test_categories_distinct_and_sorted() {
        let repo = Arc::new(InMemoryCampaignRepository::with_seed_data());
        let use_case = ListCategoriesUseCase::new(repo);

        let categories = use_case.execute().await.unwrap();
        assert_eq!(categories, vec!["disaster-relief", "health"]);
    }
}
