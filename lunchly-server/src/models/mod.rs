//! Domain models with validation at assignment
//!
//! Entities validate input in their setters and constructors.
//! Invalid input returns ValidationError, not panic, and never reaches the store.

pub mod customer;
pub mod id;
pub mod reservation;
pub mod start_at;
pub mod validation;

pub use customer::{Customer, RankedCustomer, TOP_CUSTOMERS_DEFAULT_LIMIT};
pub use id::{CustomerId, EntityId, Identity, InvalidId, ReservationId};
pub use reservation::Reservation;
pub use validation::ValidationError;

/// Notes are never absent: missing input becomes an empty string.
pub fn normalize_notes(notes: Option<String>) -> String {
    notes.unwrap_or_default()
}

/// Blank optional text (e.g. an untouched phone field) is stored as NULL.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
