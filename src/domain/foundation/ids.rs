//! Strongly-typed identifier value objects.
//!
//! Every identifier wraps a UUID and can only be obtained through
//! `new_unique()` or by parsing an external representation, so an id value
//! is always well-formed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Declares a UUID-backed identifier type.
///
/// Generates `new_unique`, `parse`, `as_uuid`, `Display` and `FromStr`.
/// `$field` is the name reported in `InvalidFormat` errors.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a fresh, globally unique identifier.
            pub fn new_unique() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parses an externally supplied identifier.
            ///
            /// # Errors
            ///
            /// - `InvalidFormat` if `raw` is not a UUID
            pub fn parse(raw: &str) -> Result<Self, ValidationError> {
                Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|e| ValidationError::invalid_format($field, e.to_string()))
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

uuid_id!(
    /// Identifier of a registered user.
    UserId,
    "user_id"
);

uuid_id!(
    /// Identifier of a host publishing menus and dinners.
    HostId,
    "host_id"
);

uuid_id!(
    /// Identifier of a menu aggregate.
    MenuId,
    "menu_id"
);

uuid_id!(
    /// Identifier of a section inside a menu.
    MenuSectionId,
    "menu_section_id"
);

uuid_id!(
    /// Identifier of an item inside a menu section.
    MenuItemId,
    "menu_item_id"
);

uuid_id!(
    /// Identifier of a review left on a menu.
    MenuReviewId,
    "menu_review_id"
);

uuid_id!(
    /// Identifier of a dinner aggregate.
    DinnerId,
    "dinner_id"
);

uuid_id!(
    /// Identifier of a reservation inside a dinner.
    ReservationId,
    "reservation_id"
);

uuid_id!(
    /// Identifier of a guest making reservations.
    GuestId,
    "guest_id"
);

uuid_id!(
    /// Identifier of the bill attached to a reservation.
    BillId,
    "bill_id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const RAW: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn new_unique_generates_distinct_values() {
        let id1 = MenuId::new_unique();
        let id2 = MenuId::new_unique();
        assert_ne!(id1, id2);
    }

    #[test]
    fn parse_preserves_raw_value() {
        let id = UserId::parse(RAW).unwrap();
        assert_eq!(id.to_string(), RAW);
    }

    #[test]
    fn parsing_same_raw_twice_yields_equal_ids() {
        assert_eq!(HostId::parse(RAW).unwrap(), HostId::parse(RAW).unwrap());
    }

    #[test]
    fn ids_work_as_set_keys() {
        let mut set = HashSet::new();
        set.insert(DinnerId::parse(RAW).unwrap());
        set.insert(DinnerId::parse(RAW).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn parse_rejects_malformed_value() {
        match GuestId::parse("not-a-uuid") {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "guest_id"),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_empty_value() {
        assert!(BillId::parse("").is_err());
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let id: ReservationId = RAW.parse().unwrap();
        assert_eq!(id, ReservationId::parse(RAW).unwrap());
    }

    #[test]
    fn id_serializes_to_json_string() {
        let id = MenuSectionId::parse(RAW).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", RAW));
    }

    proptest! {
        #[test]
        fn any_valid_uuid_round_trips(bits in any::<u128>()) {
            let raw = Uuid::from_u128(bits).to_string();
            let id = MenuItemId::parse(&raw).unwrap();
            prop_assert_eq!(id.to_string(), raw.clone());
            prop_assert_eq!(id, MenuItemId::parse(&raw).unwrap());
        }

        #[test]
        fn non_hex_strings_are_rejected(raw in "[g-z]{1,40}") {
            prop_assert!(MenuReviewId::parse(&raw).is_err());
        }
    }
}
