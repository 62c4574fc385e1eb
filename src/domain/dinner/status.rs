//! Lifecycle enums for dinners and reservations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DinnerStatus {
    #[default]
    Scheduled,
    Started,
    Ended,
    Cancelled,
}

impl DinnerStatus {
    /// Returns true if guests may still book seats.
    pub fn accepts_reservations(&self) -> bool {
        matches!(self, DinnerStatus::Scheduled)
    }
}

impl fmt::Display for DinnerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DinnerStatus::Scheduled => "Scheduled",
            DinnerStatus::Started => "Started",
            DinnerStatus::Ended => "Ended",
            DinnerStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

/// Status of a single reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    PendingGuestConfirmation,
    Reserved,
    Cancelled,
}

impl ReservationStatus {
    /// Returns true if the reservation still holds seats.
    pub fn holds_seats(&self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReservationStatus::PendingGuestConfirmation => "PendingGuestConfirmation",
            ReservationStatus::Reserved => "Reserved",
            ReservationStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dinner_status_is_scheduled() {
        assert_eq!(DinnerStatus::default(), DinnerStatus::Scheduled);
    }

    #[test]
    fn only_scheduled_dinners_accept_reservations() {
        assert!(DinnerStatus::Scheduled.accepts_reservations());
        assert!(!DinnerStatus::Started.accepts_reservations());
        assert!(!DinnerStatus::Ended.accepts_reservations());
        assert!(!DinnerStatus::Cancelled.accepts_reservations());
    }

    #[test]
    fn cancelled_reservations_release_seats() {
        assert!(ReservationStatus::PendingGuestConfirmation.holds_seats());
        assert!(ReservationStatus::Reserved.holds_seats());
        assert!(!ReservationStatus::Cancelled.holds_seats());
    }

    #[test]
    fn statuses_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::PendingGuestConfirmation).unwrap(),
            "\"pending_guest_confirmation\""
        );
        assert_eq!(serde_json::to_string(&DinnerStatus::Cancelled).unwrap(), "\"cancelled\"");
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", DinnerStatus::Started), "Started");
        assert_eq!(format!("{}", ReservationStatus::Reserved), "Reserved");
    }
}
