//! Admin Reporting Use Cases
//!
//! Read-only aggregation over the ledger, campaigns, and donor identity.

use std::sync::Arc;

use crate::domain::entities::{AdminDonation, PlatformStats};
use crate::domain::repository::DonationRepository;
use crate::error::DonationResult;

/// Platform statistics use case
pub struct PlatformStatsUseCase<D>
where
    D: DonationRepository,
{
    donations: Arc<D>,
}

impl<D> PlatformStatsUseCase<D>
where
    D: DonationRepository,
{
    pub fn new(donations: Arc<D>) -> Self {
        Self { donations }
    }

    pub async fn execute(&self) -> DonationResult<PlatformStats> {
        self.donations.platform_stats().await
    }
}

/// Full donation list use case (unpaginated)
pub struct AllDonationsUseCase<D>
where
    D: DonationRepository,
{
    donations: Arc<D>,
}

impl<D> AllDonationsUseCase<D>
where
    D: DonationRepository,
{
    pub fn new(donations: Arc<D>) -> Self {
        Self { donations }
    }

    pub async fn execute(&self) -> DonationResult<Vec<AdminDonation>> {
        self.donations.list_all_detailed().await
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
    async fn test_stats_count_completed_only_for_raised_and_donors() {
        let ledger = Arc::new(InMemoryDonationLedger::new());
        let amount = Amount::new(Decimal::from(25)).unwrap();

        // Completed donation by user 1
        let donation = ledger
            .create_pending(Id::new(1), Id::new(10), amount)
            .await
            .unwrap();
        ledger
            .complete(donation.id, Id::new(10), amount)
            .await
            .unwrap();

        // Pending donation by user 2: counts toward totals, not raised
        ledger
            .create_pending(Id::new(2), Id::new(10), amount)
            .await
            .unwrap();

        let stats = PlatformStatsUseCase::new(ledger).execute().await.unwrap();

        assert_eq!(stats.total_raised, Decimal::from(25));
        assert_eq!(stats.total_donors, 1);
        assert_eq!(stats.total_donations, 2);
    }
}
