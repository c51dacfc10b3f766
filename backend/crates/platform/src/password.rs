//! Password Hashing and Verification
//!
//! Argon2id password handling with:
//! - Memory-hard hashing (recommended by OWASP)
//! - Zeroization of sensitive data
//! - Optional pepper (application-wide secret)
//! - Unicode NFKC normalization so the same password always hashes the
//!   same regardless of client-side composition form

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length (API contract: at least 6 characters)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters long.")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// Validates length only (minimum 6, maximum 128 characters, counted
    /// as Unicode code points). Unicode is normalized using NFKC before
    /// validation and hashing.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(normalized))
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = build_argon2(pepper)?;

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword(hash.to_string()))
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (PHC string, for storage)
// ============================================================================

/// Hashed password in Argon2id PHC string format
///
/// Safe to store in the database.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create from a PHC string (from the database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc_string = phc_string.into();
        PasswordHash::new(&phc_string).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self(phc_string))
    }

    /// Get the PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        &self.0
    }

    /// Verify a clear text password against this hash
    ///
    /// ## Arguments
    /// * `clear` - The password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, clear: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.0) else {
            return false;
        };
        let Ok(argon2) = build_argon2(pepper) else {
            return false;
        };
        argon2.verify_password(clear.as_bytes(), &parsed).is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

fn build_argon2(pepper: Option<&[u8]>) -> Result<Argon2<'_>, PasswordHashError> {
    match pepper {
        Some(secret) => Argon2::new_with_secret(
            secret,
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            argon2::Params::default(),
        )
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string())),
        None => Ok(Argon2::default()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_validation() {
        assert!(ClearTextPassword::new("secret".to_string()).is_ok());
        assert!(ClearTextPassword::new("password123".to_string()).is_ok());

        // Too short
        assert!(matches!(
            ClearTextPassword::new("12345".to_string()),
            Err(PasswordPolicyError::TooShort { min: 6, actual: 5 })
        ));

        // Too long
        let long_pass = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            ClearTextPassword::new(long_pass),
            Err(PasswordPolicyError::TooLong { .. })
        ));

        // Empty
        assert!(ClearTextPassword::new("".to_string()).is_err());
        assert!(ClearTextPassword::new("      ".to_string()).is_err());
    }

    #[test]
    fn test_hash_and_verify() {
        let clear = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = clear.hash(None).unwrap();

        // Correct password should verify
        assert!(hashed.verify(&clear, None));

        // Wrong password should not verify
        let wrong = ClearTextPassword::new("WrongPassword123!".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let clear = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let pepper = b"app_secret_pepper";
        let hashed = clear.hash(Some(pepper)).unwrap();

        // With correct pepper
        assert!(hashed.verify(&clear, Some(pepper)));

        // Without pepper
        assert!(!hashed.verify(&clear, None));

        // With wrong pepper
        assert!(!hashed.verify(&clear, Some(b"wrong")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let clear = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = clear.hash(None).unwrap();

        let phc = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc).unwrap();

        assert!(restored.verify(&clear, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not a phc string").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let clear = ClearTextPassword::new("SecretPassword123!".to_string()).unwrap();
        let debug = format!("{:?}", clear);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = clear.hash(None).unwrap();
        let debug = format!("{:?}", hashed);
        assert!(debug.contains("HASH"));
    }

    #[test]
    fn test_unicode_password() {
        let clear = ClearTextPassword::new("最も安全なパスワード".to_string()).unwrap();
        let hashed = clear.hash(None).unwrap();
        assert!(hashed.verify(&clear, None));
    }
}
