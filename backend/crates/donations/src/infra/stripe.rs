//! Stripe Checkout Client
//!
//! Thin REST client for the two session operations the reconciliation
//! flow needs: create and retrieve. Requests are form-encoded with the
//! secret key as a bearer credential, per the provider's API.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::application::config::PaymentConfig;
use crate::domain::provider::{
    CheckoutProvider, CheckoutSession, CheckoutSessionRequest, SessionMetadata,
};
use crate::error::{DonationError, DonationResult};

/// Stripe-backed checkout provider
#[derive(Clone)]
pub struct StripeCheckout {
    http: reqwest::Client,
    config: Arc<PaymentConfig>,
}

impl StripeCheckout {
    pub fn new(config: Arc<PaymentConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn parse_session(response: reqwest::Response) -> DonationResult<CheckoutSession> {
        let status = response.status();

        if !status.is_success() {
            let body: StripeErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .error
                .message
                .unwrap_or_else(|| format!("Checkout provider returned {}", status));
            return Err(DonationError::PaymentSetup(message));
        }

        let body: StripeSessionBody = response
            .json()
            .await
            .map_err(|e| DonationError::PaymentSetup(e.to_string()))?;

        Ok(CheckoutSession {
            id: body.id,
            url: body.url,
            payment_status: body.payment_status,
            metadata: SessionMetadata {
                campaign_id: body.metadata.get("campaignId").cloned().unwrap_or_default(),
                user_id: body.metadata.get("userId").cloned().unwrap_or_default(),
                amount: body.metadata.get("amount").cloned().unwrap_or_default(),
            },
        })
    }
}

impl CheckoutProvider for StripeCheckout {
    async fn create_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> DonationResult<CheckoutSession> {
        // Smallest currency unit, rounded to the nearest integer
        let unit_amount = request.amount.to_minor_units().ok_or_else(|| {
            DonationError::PaymentSetup("Donation amount out of range".to_string())
        })?;

        let title = request.campaign_title.as_deref().unwrap_or("Campaign");

        let params: Vec<(&str, String)> = vec![
            ("payment_method_types[0]", "card".to_string()),
            ("mode", "payment".to_string()),
            (
                "line_items[0][price_data][currency]",
                self.config.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                format!("Donation: {}", title),
            ),
            (
                "line_items[0][price_data][product_data][description]",
                format!("Supporting {}", title),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                unit_amount.to_string(),
            ),
            ("line_items[0][quantity]", "1".to_string()),
            // Reconciliation metadata, read back at verification time
            ("metadata[campaignId]", request.campaign_id.to_string()),
            ("metadata[userId]", request.user_id.to_string()),
            ("metadata[amount]", request.amount.to_string()),
            ("success_url", self.config.success_url()),
            ("cancel_url", self.config.cancel_url()),
        ];

        let response = self
            .http
            .post(format!("{}/v1/checkout/sessions", self.config.api_base))
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| DonationError::PaymentSetup(e.to_string()))?;

        Self::parse_session(response).await
    }

    async fn retrieve_session(&self, session_id: &str) -> DonationResult<CheckoutSession> {
        let response = self
            .http
            .get(format!(
                "{}/v1/checkout/sessions/{}",
                self.config.api_base, session_id
            ))
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(|e| DonationError::PaymentSetup(e.to_string()))?;

        Self::parse_session(response).await
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct StripeSessionBody {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    payment_status: String,
    #[serde(default)]
    metadata: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct StripeErrorBody {
    #[serde(default)]
    error: StripeErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_body_decoding() {
        let json = r#"{
            "id": "cs_test_abc123",
            "url": "https://checkout.stripe.com/c/pay/cs_test_abc123",
            "payment_status": "unpaid",
            "metadata": {"campaignId": "3", "userId": "7", "amount": "25"}
        }"#;

        let body: StripeSessionBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.id, "cs_test_abc123");
        assert_eq!(body.payment_status, "unpaid");
        assert_eq!(body.metadata.get("campaignId").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_error_body_decoding() {
        let json = r#"{"error": {"message": "No such checkout session", "type": "invalid_request_error"}}"#;
        let body: StripeErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(
            body.error.message.as_deref(),
            Some("No such checkout session")
        );

        // Unknown shapes fall back to defaults rather than failing
        let body: StripeErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.message.is_none());
    }
}
