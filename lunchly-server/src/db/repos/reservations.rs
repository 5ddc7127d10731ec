//! Reservation repository

use sqlx::PgPool;

use crate::db::{ReservationData, ReservationRecord};
use crate::models::{CustomerId, ReservationId};
use crate::{Error, Result};

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Reservations for one customer, earliest first.
    pub async fn for_customer(&self, customer_id: CustomerId) -> Result<Vec<ReservationRecord>> {
        let rows = sqlx::query_as::<_, ReservationRecord>(
            r#"
            SELECT id, customer_id, num_guests, start_at, notes
            FROM reservations
            WHERE customer_id = $1
            ORDER BY start_at, id
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single reservation by id.
    pub async fn get(&self, id: ReservationId) -> Result<ReservationRecord> {
        sqlx::query_as::<_, ReservationRecord>(
            r#"
            SELECT id, customer_id, num_guests, start_at, notes
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| Error::not_found("reservation", id))
    }

    /// Insert a reservation, returning the id the database assigned.
    ///
    /// An unknown customer id violates the foreign key and is reported as
    /// `Error::NotFound` for that customer.
    pub async fn insert(&self, data: &ReservationData) -> Result<ReservationId> {
        let id = sqlx::query_scalar::<_, ReservationId>(
            r#"
            INSERT INTO reservations (customer_id, num_guests, start_at, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(data.customer_id)
        .bind(data.num_guests)
        .bind(data.start_at)
        .bind(&data.notes)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Error::not_found("customer", data.customer_id)
            }
            e => Error::Store(e),
        })?;

        Ok(id)
    }

    /// Update guests, start time and notes. `customer_id` is left alone.
    pub async fn update(&self, id: ReservationId, data: &ReservationData) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET num_guests = $1,
                start_at = $2,
                notes = $3
            WHERE id = $4
            "#,
        )
        .bind(data.num_guests)
        .bind(data.start_at)
        .bind(&data.notes)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("reservation", id));
        }
        Ok(())
    }
}
