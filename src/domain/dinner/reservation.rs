//! Reservation entity, owned by a Dinner.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BillId, GuestId, ReservationId, Timestamp};

use super::ReservationStatus;

/// A guest's booking of one or more seats at a dinner.
///
/// Only [`Dinner`](super::Dinner) creates reservations, so seat limits are
/// always checked against the whole guest list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    guest_count: u32,
    status: ReservationStatus,
    guest_id: GuestId,
    bill_id: BillId,
    arrival_time: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Reservation {
    pub(super) fn create(guest_id: GuestId, guest_count: u32, bill_id: BillId) -> Self {
        let now = Timestamp::now();
        Self {
            id: ReservationId::new_unique(),
            guest_count,
            status: ReservationStatus::default(),
            guest_id,
            bill_id,
            arrival_time: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &ReservationId {
        &self.id
    }

    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn guest_id(&self) -> &GuestId {
        &self.guest_id
    }

    pub fn bill_id(&self) -> &BillId {
        &self.bill_id
    }

    /// When the guest arrived, if they have.
    pub fn arrival_time(&self) -> Option<&Timestamp> {
        self.arrival_time.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reservation_awaits_confirmation() {
        let guest = GuestId::new_unique();
        let bill = BillId::new_unique();
        let reservation = Reservation::create(guest, 2, bill);

        assert_eq!(reservation.status(), ReservationStatus::PendingGuestConfirmation);
        assert_eq!(reservation.guest_count(), 2);
        assert_eq!(reservation.guest_id(), &guest);
        assert_eq!(reservation.bill_id(), &bill);
        assert!(reservation.arrival_time().is_none());
    }
}
