//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Token validity window (24 hours)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        let bytes = platform::crypto::random_bytes(32);
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
