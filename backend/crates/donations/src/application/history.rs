//! Donation History Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::DonationWithCampaign;
use crate::domain::repository::DonationRepository;
use crate::error::DonationResult;

/// My donations use case
pub struct MyDonationsUseCase<D>
where
    D: DonationRepository,
{
    donations: Arc<D>,
}

impl<D> MyDonationsUseCase<D>
where
    D: DonationRepository,
{
    pub fn new(donations: Arc<D>) -> Self {
        Self { donations }
    }

    pub async fn execute(&self, user_id: UserId) -> DonationResult<Vec<DonationWithCampaign>> {
        self.donations.list_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryDonationLedger;
    use kernel::amount::Amount;
    use kernel::id::Id;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_history_is_scoped_to_user_and_newest_first() {
        let ledger = Arc::new(InMemoryDonationLedger::new());

        let first = ledger
            .create_pending(
                Id::new(1),
                Id::new(10),
                Amount::new(Decimal::from(5)).unwrap(),
            )
            .await
            .unwrap();
        let second = ledger
            .create_pending(
                Id::new(1),
                Id::new(11),
                Amount::new(Decimal::from(7)).unwrap(),
            )
            .await
            .unwrap();
        // Another user's donation must not appear
        ledger
            .create_pending(
                Id::new(2),
                Id::new(10),
                Amount::new(Decimal::from(9)).unwrap(),
            )
            .await
            .unwrap();

        let history = MyDonationsUseCase::new(ledger)
            .execute(Id::new(1))
            .await
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);
    }
}
