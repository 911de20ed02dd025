//! Typed identifier for places.
//!
//! Identifiers are assigned by storage, so there is no constructor that
//! generates one; adapters wrap the integer key they read back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Place`](crate::place::Place).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(i64);

impl PlaceId {
    /// Wrap a storage-assigned integer key.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner integer key.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for PlaceId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_inner_value() {
        assert_eq!(PlaceId::from_i64(42).to_string(), "42");
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&PlaceId::from_i64(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_deserialize_from_bare_integer() {
        let id: PlaceId = serde_json::from_str("99999").unwrap();
        assert_eq!(id.as_i64(), 99999);
    }

    #[test]
    fn should_reject_non_integer_json() {
        assert!(serde_json::from_str::<PlaceId>("\"abc\"").is_err());
    }

    #[test]
    fn should_order_by_inner_value() {
        assert!(PlaceId::from(1) < PlaceId::from(2));
    }
}
