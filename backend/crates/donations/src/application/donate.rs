//! Process Donation Use Case (direct path)
//!
//! Records a pending donation, then marks it completed and applies the
//! raised-amount increment in one transaction. Unlike the checkout
//! path there is no idempotency guard here: a retried request records
//! a second donation.

use std::sync::Arc;

use campaigns::domain::repository::CampaignRepository;
use kernel::amount::Amount;
use kernel::id::{CampaignId, UserId};
use rust_decimal::Decimal;

use crate::domain::entities::Donation;
use crate::domain::repository::DonationRepository;
use crate::error::{DonationError, DonationResult};

/// Process donation input
pub struct DonateInput {
    pub campaign_id: Option<i64>,
    pub amount: Option<Decimal>,
}

/// Process donation use case
pub struct ProcessDonationUseCase<D, C>
where
    D: DonationRepository,
    C: CampaignRepository,
{
    donations: Arc<D>,
    campaigns: Arc<C>,
}

impl<D, C> ProcessDonationUseCase<D, C>
where
    D: DonationRepository,
    C: CampaignRepository,
{
    pub fn new(donations: Arc<D>, campaigns: Arc<C>) -> Self {
        Self {
            donations,
            campaigns,
        }
    }

    pub async fn execute(&self, user_id: UserId, input: DonateInput) -> DonationResult<Donation> {
        let (Some(campaign_id), Some(amount)) = (input.campaign_id, input.amount) else {
            return Err(DonationError::Validation(
                "Campaign ID and amount are required.".to_string(),
            ));
        };

        let amount = Amount::new(amount).map_err(|_| {
            DonationError::Validation("Donation amount must be a positive number.".to_string())
        })?;

        let campaign_id = CampaignId::new(campaign_id);

        self.campaigns
            .find_by_id(campaign_id)
            .await
            .map_err(|e| DonationError::Internal(e.to_string()))?
            .ok_or(DonationError::CampaignNotFound)?;

        let donation = self
            .donations
            .create_pending(user_id, campaign_id, amount)
            .await?;

        // Payment is simulated on this path; completion and the
        // raised-amount increment are one transaction.
        let donation = self
            .donations
            .complete(donation.id, campaign_id, amount)
            .await?;

        tracing::info!(
            donation_id = %donation.id,
            campaign_id = %campaign_id,
            amount = %amount,
            "Donation processed"
        );

        Ok(donation)
    }
}
