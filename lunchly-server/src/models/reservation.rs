//! Reservation entity
//!
//! A booking for a party, owned by exactly one customer.
//!
//! # Invariants
//! - `num_guests` is at least 1
//! - `start_at` always holds a real date/time
//! - `customer_id` is written once; a second assignment is rejected
//! - `notes` is never absent

use chrono::NaiveDateTime;

use crate::db::{ReservationData, ReservationRecord, Store};
use crate::Result;

use super::{normalize_notes, start_at, CustomerId, Identity, ReservationId, ValidationError};

/// Smallest party the restaurant will book
pub const MIN_GUESTS: i32 = 1;

/// A reservation for a party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    identity: Identity<ReservationId>,
    customer_id: Option<CustomerId>,
    num_guests: i32,
    start_at: NaiveDateTime,
    notes: String,
}

impl Reservation {
    /// An unsaved reservation for `customer_id`.
    ///
    /// `start_at` is parsed as user input; see [`start_at::parse`].
    pub fn new(
        customer_id: CustomerId,
        start_at: &str,
        num_guests: i32,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let mut reservation = Self::unassigned(start_at, num_guests, notes)?;
        reservation.set_customer_id(customer_id)?;
        Ok(reservation)
    }

    /// An unsaved reservation whose customer is assigned later with
    /// [`set_customer_id`](Self::set_customer_id).
    pub fn unassigned(
        start_at: &str,
        num_guests: i32,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            identity: Identity::Unsaved,
            customer_id: None,
            num_guests: check_num_guests(num_guests)?,
            start_at: start_at::parse(start_at)?,
            notes: normalize_notes(notes),
        })
    }

    pub fn id(&self) -> Option<ReservationId> {
        self.identity.id()
    }

    pub fn identity(&self) -> Identity<ReservationId> {
        self.identity
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn num_guests(&self) -> i32 {
        self.num_guests
    }

    pub fn start_at(&self) -> NaiveDateTime {
        self.start_at
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Assign the owning customer. Only the first assignment is accepted.
    pub fn set_customer_id(&mut self, customer_id: CustomerId) -> Result<(), ValidationError> {
        if self.customer_id.is_some() {
            return Err(ValidationError::AlreadySet {
                field: "customer id",
            });
        }
        self.customer_id = Some(customer_id);
        Ok(())
    }

    pub fn set_num_guests(&mut self, num_guests: i32) -> Result<(), ValidationError> {
        self.num_guests = check_num_guests(num_guests)?;
        Ok(())
    }

    /// Parse a guest count typed into a form.
    pub fn parse_num_guests(input: &str) -> Result<i32, ValidationError> {
        input
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotANumber {
                field: "number of guests",
                value: input.to_owned(),
            })
    }

    /// Replace the start time from user input. On error the old value stays.
    pub fn set_start_at(&mut self, input: &str) -> Result<(), ValidationError> {
        self.start_at = start_at::parse(input)?;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = normalize_notes(notes);
    }

    /// e.g. `March 1st 2024, 7:05 pm`
    pub fn formatted_start_at(&self) -> String {
        start_at::format(&self.start_at)
    }

    /// A customer's reservations, earliest first.
    pub async fn get_reservations_for_customer(
        store: &dyn Store,
        customer_id: CustomerId,
    ) -> Result<Vec<Self>> {
        let rows = store.reservations_for_customer(customer_id).await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }

    /// Fetch one reservation; `Error::NotFound` if the id is unknown.
    pub async fn get(store: &dyn Store, id: ReservationId) -> Result<Self> {
        store.get_reservation(id).await.map(Self::from)
    }

    /// Insert when unsaved, otherwise update guests, start time and notes.
    ///
    /// An unsaved reservation with no customer fails validation without
    /// touching the store.
    pub async fn save(&mut self, store: &dyn Store) -> Result<ReservationId> {
        let customer_id = self.customer_id.ok_or(ValidationError::Missing {
            field: "customer id",
        })?;
        let data = ReservationData {
            customer_id,
            num_guests: self.num_guests,
            start_at: self.start_at,
            notes: self.notes.clone(),
        };

        match self.identity {
            Identity::Unsaved => {
                let id = store.insert_reservation(&data).await?;
                tracing::debug!(reservation_id = %id, customer_id = %customer_id, "reservation created");
                self.identity = Identity::Saved(id);
                Ok(id)
            }
            Identity::Saved(id) => {
                store.update_reservation(id, &data).await?;
                tracing::debug!(reservation_id = %id, "reservation updated");
                Ok(id)
            }
        }
    }
}

fn check_num_guests(num_guests: i32) -> Result<i32, ValidationError> {
    if num_guests < MIN_GUESTS {
        return Err(ValidationError::TooSmall {
            field: "number of guests",
            min: MIN_GUESTS.into(),
            value: num_guests.into(),
        });
    }
    Ok(num_guests)
}

impl From<ReservationRecord> for Reservation {
    fn from(row: ReservationRecord) -> Self {
        Self {
            identity: Identity::Saved(row.id),
            customer_id: Some(row.customer_id),
            num_guests: row.num_guests,
            start_at: row.start_at,
            notes: row.notes,
        }
    }
}
