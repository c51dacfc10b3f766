//! Credential Issuance and Verification
//!
//! Bearer tokens are HMAC-SHA256-signed claim payloads:
//! `base64url(JSON claims) + "." + base64url(signature)`.
//! Expiry is carried inside the claims; there is no server-side session
//! store and no pre-expiry revocation.

use chrono::Utc;
use platform::crypto::{constant_time_eq, from_base64url, hmac_sha256, to_base64url};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::value_object::claim::Claim;
use crate::error::{AuthError, AuthResult};

/// Issue a signed token for a user, valid for the configured TTL
pub fn issue_token(config: &AuthConfig, user: &User) -> AuthResult<String> {
    let claim = Claim {
        id: user.id,
        email: user.email.clone(),
        role: user.role,
        exp: Utc::now().timestamp() + config.token_ttl_secs(),
    };
    sign_claim(config, &claim)
}

/// Sign a claim payload
pub fn sign_claim(config: &AuthConfig, claim: &Claim) -> AuthResult<String> {
    let payload =
        serde_json::to_vec(claim).map_err(|e| AuthError::Internal(e.to_string()))?;
    let payload_b64 = to_base64url(&payload);

    let signature = hmac_sha256(&config.token_secret, payload_b64.as_bytes());

    Ok(format!("{}.{}", payload_b64, to_base64url(&signature)))
}

/// Verify a token's signature and expiry, returning the embedded claim
///
/// Malformed or forged tokens and expired tokens fail with distinct
/// error variants (both are access denials).
pub fn verify_token(config: &AuthConfig, token: &str) -> AuthResult<Claim> {
    let (payload_b64, signature_b64) =
        token.split_once('.').ok_or(AuthError::TokenInvalid)?;

    let signature = from_base64url(signature_b64).map_err(|_| AuthError::TokenInvalid)?;
    let expected = hmac_sha256(&config.token_secret, payload_b64.as_bytes());

    if !constant_time_eq(&expected, &signature) {
        return Err(AuthError::TokenInvalid);
    }

    let payload = from_base64url(payload_b64).map_err(|_| AuthError::TokenInvalid)?;
    let claim: Claim =
        serde_json::from_slice(&payload).map_err(|_| AuthError::TokenInvalid)?;

    if claim.is_expired_at(Utc::now().timestamp()) {
        return Err(AuthError::TokenExpired);
    }

    Ok(claim)
}
