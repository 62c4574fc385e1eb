//! Dinner domain module.
//!
//! A dinner is a scheduled event hosted at a location, serving one menu.
//! It owns its reservations; the menu and host are referenced by id.

mod aggregate;
mod reservation;
mod status;
mod values;

pub use aggregate::{Dinner, NewDinner};
pub use reservation::Reservation;
pub use status::{DinnerStatus, ReservationStatus};
pub use values::{Location, Price};
