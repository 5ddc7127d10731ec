//! Row types exchanged with the store

use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::models::{CustomerId, ReservationId};

/// Customer row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: String,
}

/// Customer row with its reservation count, for the top-customers report
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RankedCustomerRecord {
    #[sqlx(flatten)]
    pub customer: CustomerRecord,
    pub reservation_count: i64,
}

/// Writable customer columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerData {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: String,
}

/// Reservation row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ReservationRecord {
    pub id: ReservationId,
    pub customer_id: CustomerId,
    pub num_guests: i32,
    pub start_at: NaiveDateTime,
    pub notes: String,
}

/// Writable reservation columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationData {
    pub customer_id: CustomerId,
    pub num_guests: i32,
    pub start_at: NaiveDateTime,
    pub notes: String,
}

impl CustomerData {
    pub(crate) fn into_record(self, id: CustomerId) -> CustomerRecord {
        CustomerRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            notes: self.notes,
        }
    }
}

impl ReservationData {
    pub(crate) fn into_record(self, id: ReservationId) -> ReservationRecord {
        ReservationRecord {
            id,
            customer_id: self.customer_id,
            num_guests: self.num_guests,
            start_at: self.start_at,
            notes: self.notes,
        }
    }
}
