//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the booking domain.

mod errors;
mod ids;
mod rating;
mod text;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ErrorKind, ErrorList, ValidationError};
pub use ids::{
    BillId, DinnerId, GuestId, HostId, MenuId, MenuItemId, MenuReviewId, MenuSectionId,
    ReservationId, UserId,
};
pub use rating::AverageRating;
pub use text::{
    bounded_text, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_SHORT_DESCRIPTION_LENGTH,
};
pub use timestamp::Timestamp;
