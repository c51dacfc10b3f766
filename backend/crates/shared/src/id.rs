//! Common ID Types
//!
//! Type-safe wrappers over the database's integer surrogate keys.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type CampaignId = Id<markers::Campaign>;
/// ```
///
/// Comparison and copying are implemented by hand: derives would put
/// bounds on the marker type, which is only ever phantom.
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Create from a raw database value
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self::new)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Campaign IDs
    pub struct Campaign;

    /// Marker for Donation IDs
    pub struct Donation;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type CampaignId = Id<markers::Campaign>;
pub type DonationId = Id<markers::Donation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::new(1);
        let campaign_id: CampaignId = Id::new(1);

        // These are different types, cannot be mixed
        let _u: i64 = user_id.as_i64();
        let _c: i64 = campaign_id.as_i64();
    }

    #[test]
    fn test_id_parse() {
        let id: CampaignId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);

        assert!("abc".parse::<CampaignId>().is_err());
        assert!("4.2".parse::<CampaignId>().is_err());
        assert!("".parse::<CampaignId>().is_err());
    }

    #[test]
    fn test_id_serde() {
        let id: DonationId = Id::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");

        let back: DonationId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
