//! Dinner aggregate root.
//!
//! # Ownership
//!
//! Dinners own their reservations. The served menu and the host are
//! referenced by id only.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    bounded_text, BillId, DinnerId, DomainError, ErrorCode, GuestId, HostId, MenuId, Timestamp,
    MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
};

use super::{DinnerStatus, Location, Price, Reservation};

/// Everything needed to schedule a dinner.
#[derive(Debug, Clone)]
pub struct NewDinner {
    pub name: String,
    pub description: String,
    pub start_date_time: Timestamp,
    pub end_date_time: Timestamp,
    pub is_public: bool,
    pub max_guests: u32,
    pub price: Price,
    pub host_id: HostId,
    pub menu_id: MenuId,
    pub image_url: String,
    pub location: Location,
}

/// Dinner aggregate - a scheduled event guests can book.
///
/// # Invariants
///
/// - `end_date_time` is after `start_date_time`
/// - `max_guests` is at least one
/// - seats held by non-cancelled reservations never exceed `max_guests`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dinner {
    id: DinnerId,
    name: String,
    description: String,
    start_date_time: Timestamp,
    end_date_time: Timestamp,
    started_date_time: Option<Timestamp>,
    ended_date_time: Option<Timestamp>,
    status: DinnerStatus,
    is_public: bool,
    max_guests: u32,
    price: Price,
    host_id: HostId,
    menu_id: MenuId,
    image_url: String,
    location: Location,
    reservations: Vec<Reservation>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Dinner {
    /// Schedules a new dinner with no reservations.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the window is empty or `max_guests` is zero
    /// - `ValidationFailed` / `EmptyField` if name or description is invalid
    pub fn create(new: NewDinner) -> Result<Self, DomainError> {
        let name = bounded_text("name", new.name, MAX_NAME_LENGTH)?;
        let description = bounded_text("description", new.description, MAX_DESCRIPTION_LENGTH)?;
        if !new.end_date_time.is_after(&new.start_date_time) {
            return Err(DomainError::validation(
                "end_date_time",
                "Dinner must end after it starts",
            ));
        }
        if new.max_guests == 0 {
            return Err(DomainError::validation(
                "max_guests",
                "Dinner must allow at least one guest",
            ));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: DinnerId::new_unique(),
            name,
            description,
            start_date_time: new.start_date_time,
            end_date_time: new.end_date_time,
            started_date_time: None,
            ended_date_time: None,
            status: DinnerStatus::Scheduled,
            is_public: new.is_public,
            max_guests: new.max_guests,
            price: new.price,
            host_id: new.host_id,
            menu_id: new.menu_id,
            image_url: new.image_url,
            location: new.location,
            reservations: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &DinnerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_date_time(&self) -> &Timestamp {
        &self.start_date_time
    }

    pub fn end_date_time(&self) -> &Timestamp {
        &self.end_date_time
    }

    pub fn started_date_time(&self) -> Option<&Timestamp> {
        self.started_date_time.as_ref()
    }

    pub fn ended_date_time(&self) -> Option<&Timestamp> {
        self.ended_date_time.as_ref()
    }

    pub fn status(&self) -> DinnerStatus {
        self.status
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn max_guests(&self) -> u32 {
        self.max_guests
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn host_id(&self) -> &HostId {
        &self.host_id
    }

    /// Returns the menu served (not owned).
    pub fn menu_id(&self) -> &MenuId {
        &self.menu_id
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Seats held by reservations that are not cancelled.
    pub fn reserved_seats(&self) -> u32 {
        self.reservations
            .iter()
            .filter(|r| r.status().holds_seats())
            .map(Reservation::guest_count)
            .sum()
    }

    /// Seats still available.
    pub fn remaining_seats(&self) -> u32 {
        self.max_guests.saturating_sub(self.reserved_seats())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Books `guest_count` seats for a guest.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `guest_count` is zero
    /// - `DinnerNotAcceptingReservations` unless the dinner is scheduled
    /// - `DinnerFullyBooked` if not enough seats remain
    pub fn add_reservation(
        &mut self,
        guest_id: GuestId,
        guest_count: u32,
        bill_id: BillId,
    ) -> Result<&Reservation, DomainError> {
        if guest_count == 0 {
            return Err(DomainError::validation(
                "guest_count",
                "Reservation must include at least one guest",
            ));
        }
        if !self.status.accepts_reservations() {
            return Err(DomainError::new(
                ErrorCode::DinnerNotAcceptingReservations,
                format!("Dinner is {} and does not accept reservations", self.status),
            ));
        }
        if guest_count > self.remaining_seats() {
            return Err(DomainError::new(
                ErrorCode::DinnerFullyBooked,
                format!(
                    "Only {} of {} seats remain",
                    self.remaining_seats(),
                    self.max_guests
                ),
            ));
        }

        self.reservations
            .push(Reservation::create(guest_id, guest_count, bill_id));
        self.updated_at = Timestamp::now();
        let index = self.reservations.len() - 1;
        Ok(&self.reservations[index])
    }
}
