//! Verify Donation Use Case (reconciliation)
//!
//! Confirms from the provider's record that a checkout session was paid
//! and commits the donation exactly once. Idempotency is keyed on the
//! session id: a replayed verification returns the recorded donation
//! without touching the raised amount again.

use std::sync::Arc;

use kernel::amount::Amount;
use kernel::id::{CampaignId, UserId};
use rust_decimal::Decimal;

use crate::domain::entities::Donation;
use crate::domain::provider::{CheckoutProvider, SessionMetadata};
use crate::domain::repository::DonationRepository;
use crate::error::{DonationError, DonationResult};

/// Verify output
#[derive(Debug)]
pub struct VerifyOutput {
    pub donation: Donation,
    /// True when an earlier verification already recorded the donation
    pub already_recorded: bool,
}

/// Verify donation use case
pub struct VerifyDonationUseCase<D, P>
where
    D: DonationRepository,
    P: CheckoutProvider,
{
    donations: Arc<D>,
    provider: Arc<P>,
}

impl<D, P> VerifyDonationUseCase<D, P>
where
    D: DonationRepository,
    P: CheckoutProvider,
{
    pub fn new(donations: Arc<D>, provider: Arc<P>) -> Self {
        Self {
            donations,
            provider,
        }
    }

    pub async fn execute(&self, session_id: Option<String>) -> DonationResult<VerifyOutput> {
        let session_id = session_id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DonationError::Validation("Session ID is required".to_string()))?;

        let session = self.provider.retrieve_session(&session_id).await?;

        if !session.is_paid() {
            return Err(DonationError::PaymentNotCompleted {
                status: session.payment_status,
            });
        }

        // Replay guard: a session id maps to at most one ledger entry
        if let Some(existing) = self.donations.find_by_session_id(&session_id).await? {
            tracing::info!(session_id = %session_id, donation_id = %existing.id, "Donation already recorded");
            return Ok(VerifyOutput {
                donation: existing,
                already_recorded: true,
            });
        }

        let (user_id, campaign_id, amount) = parse_metadata(&session.metadata)?;

        let result = self
            .donations
            .create_completed_with_session(user_id, campaign_id, amount, &session_id)
            .await;

        let donation = match result {
            Ok(donation) => donation,
            // Two verifications raced past the lookup; the unique
            // session id made the loser fail, so hand back the winner's
            // donation instead of a second increment.
            Err(DonationError::SessionAlreadyRecorded) => {
                let existing = self
                    .donations
                    .find_by_session_id(&session_id)
                    .await?
                    .ok_or_else(|| {
                        DonationError::Internal(
                            "Session recorded concurrently but not found".to_string(),
                        )
                    })?;
                return Ok(VerifyOutput {
                    donation: existing,
                    already_recorded: true,
                });
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            session_id = %session_id,
            donation_id = %donation.id,
            campaign_id = %campaign_id,
            amount = %amount,
            "Donation verified and recorded"
        );

        Ok(VerifyOutput {
            donation,
            already_recorded: false,
        })
    }
}

/// Decode the identifiers the session was tagged with at creation
fn parse_metadata(metadata: &SessionMetadata) -> DonationResult<(UserId, CampaignId, Amount)> {
    let user_id: i64 = metadata
        .user_id
        .parse()
        .map_err(|_| DonationError::Internal("Malformed session metadata: userId".to_string()))?;

    let campaign_id: i64 = metadata.campaign_id.parse().map_err(|_| {
        DonationError::Internal("Malformed session metadata: campaignId".to_string())
    })?;

    let amount: Decimal = metadata
        .amount
        .parse()
        .map_err(|_| DonationError::Internal("Malformed session metadata: amount".to_string()))?;
    let amount = Amount::new(amount)
        .map_err(|_| DonationError::Internal("Malformed session metadata: amount".to_string()))?;

    Ok((UserId::new(user_id), CampaignId::new(campaign_id), amount))
}
