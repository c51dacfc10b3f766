//! Application Configuration
//!
//! Configuration for the payment reconciliation layer.

/// Payment provider configuration
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Provider secret API key
    pub secret_key: String,
    /// Provider API base URL (overridable for tests)
    pub api_base: String,
    /// Frontend origin for success/cancel redirects
    pub frontend_url: String,
    /// ISO currency code for checkout sessions
    pub currency: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            api_base: "https://api.stripe.com".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            currency: "usd".to_string(),
        }
    }
}

impl PaymentConfig {
    /// Create config with a secret key, defaults elsewhere
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            ..Default::default()
        }
    }

    /// Success redirect; the provider substitutes the session id
    pub fn success_url(&self) -> String {
        format!(
            "{}/donation/success?session_id={{CHECKOUT_SESSION_ID}}",
            self.frontend_url
        )
    }

    /// Cancel redirect back to the landing page
    pub fn cancel_url(&self) -> String {
        format!("{}/?cancelled=true", self.frontend_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_urls() {
        let config = PaymentConfig::new("sk_test_123");
        assert_eq!(
            config.success_url(),
            "http://localhost:3000/donation/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(config.cancel_url(), "http://localhost:3000/?cancelled=true");
    }
}
