//! Create Checkout Session Use Case
//!
//! Asks the external provider for a hosted payment session. The
//! donation itself is only recorded later, at verification time.

use std::sync::Arc;

use kernel::amount::Amount;
use kernel::id::{CampaignId, UserId};
use rust_decimal::Decimal;

use crate::domain::provider::{CheckoutProvider, CheckoutSessionRequest};
use crate::error::{DonationError, DonationResult};

/// Checkout input
pub struct CheckoutInput {
    pub amount: Option<Decimal>,
    pub campaign_id: Option<i64>,
    pub campaign_title: Option<String>,
}

/// Checkout output
#[derive(Debug)]
pub struct CheckoutOutput {
    pub session_id: String,
    pub url: Option<String>,
}

/// Create checkout session use case
pub struct CreateCheckoutSessionUseCase<P>
where
    P: CheckoutProvider,
{
    provider: Arc<P>,
}

impl<P> CreateCheckoutSessionUseCase<P>
where
    P: CheckoutProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        input: CheckoutInput,
    ) -> DonationResult<CheckoutOutput> {
        let amount = input
            .amount
            .and_then(|a| Amount::new(a).ok())
            .ok_or_else(|| DonationError::Validation("Invalid donation amount".to_string()))?;

        let campaign_id = input
            .campaign_id
            .map(CampaignId::new)
            .ok_or_else(|| DonationError::Validation("Campaign ID is required".to_string()))?;

        let session = self
            .provider
            .create_session(&CheckoutSessionRequest {
                amount,
                campaign_id,
                campaign_title: input.campaign_title,
                user_id,
            })
            .await?;

        tracing::info!(
            session_id = %session.id,
            campaign_id = %campaign_id,
            amount = %amount,
            "Checkout session created"
        );

        Ok(CheckoutOutput {
            session_id: session.id,
            url: session.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::FakeCheckoutProvider;
    use kernel::id::Id;

    #[tokio::test]
    async fn test_session_created_with_metadata() {
        let provider = Arc::new(FakeCheckoutProvider::new());
        let use_case = CreateCheckoutSessionUseCase::new(provider.clone());

        let output = use_case
            .execute(
                Id::new(7),
                CheckoutInput {
                    amount: Some(Decimal::from(25)),
                    campaign_id: Some(3),
                    campaign_title: Some("Clean Water".to_string()),
                },
            )
            .await
            .unwrap();

        assert!(output.url.is_some());

        let session = provider.session(&output.session_id);
        assert_eq!(session.metadata.campaign_id, "3");
        assert_eq!(session.metadata.user_id, "7");
        assert_eq!(session.metadata.amount, "25");
    }

    #[tokio::test]
    async fn test_invalid_amount_rejected() {
        let provider = Arc::new(FakeCheckoutProvider::new());
        let use_case = CreateCheckoutSessionUseCase::new(provider);

        for amount in [None, Some(Decimal::ZERO), Some(Decimal::from(-5))] {
            let err = use_case
                .execute(
                    Id::new(7),
                    CheckoutInput {
                        amount,
                        campaign_id: Some(3),
                        campaign_title: None,
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err, DonationError::Validation(ref m) if m == "Invalid donation amount"));
        }
    }

    #[tokio::test]
    async fn test_missing_campaign_id_rejected() {
        let provider = Arc::new(FakeCheckoutProvider::new());
        let use_case = CreateCheckoutSessionUseCase::new(provider);

        let err = use_case
            .execute(
                Id::new(7),
                CheckoutInput {
                    amount: Some(Decimal::from(25)),
                    campaign_id: None,
                    campaign_title: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DonationError::Validation(ref m) if m == "Campaign ID is required"));
    }
}
