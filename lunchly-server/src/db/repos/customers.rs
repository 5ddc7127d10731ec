//! Customer repository
//!
//! - list/search: single SELECT, ordered by last name, first name
//! - top: JOIN + GROUP BY for reservation counts (no N+1)
//! - save: INSERT ... RETURNING id, or UPDATE by id

use sqlx::PgPool;

use crate::db::{escape_like, CustomerData, CustomerRecord, RankedCustomerRecord};
use crate::models::CustomerId;
use crate::{Error, Result};

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All customers, alphabetical by last then first name.
    pub async fn all(&self) -> Result<Vec<CustomerRecord>> {
        let rows = sqlx::query_as::<_, CustomerRecord>(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            ORDER BY last_name, first_name, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single customer by id.
    pub async fn get(&self, id: CustomerId) -> Result<CustomerRecord> {
        sqlx::query_as::<_, CustomerRecord>(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| Error::not_found("customer", id))
    }

    /// Customers whose "first last" contains `term`, ignoring case.
    pub async fn search(&self, term: &str) -> Result<Vec<CustomerRecord>> {
        let pattern = format!("%{}%", escape_like(term));
        let rows = sqlx::query_as::<_, CustomerRecord>(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            WHERE CONCAT(first_name, ' ', last_name) ILIKE $1
            ORDER BY last_name, first_name, id
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Customers ranked by number of reservations.
    ///
    /// Inner join: customers without reservations never rank.
    pub async fn top(&self, limit: u32) -> Result<Vec<RankedCustomerRecord>> {
        let rows = sqlx::query_as::<_, RankedCustomerRecord>(
            r#"
            SELECT
                c.id,
                c.first_name,
                c.last_name,
                c.phone,
                c.notes,
                COUNT(r.id) AS reservation_count
            FROM customers c
            JOIN reservations r ON r.customer_id = c.id
            GROUP BY c.id
            ORDER BY reservation_count DESC, c.last_name, c.first_name, c.id
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a customer, returning the id the database assigned.
    pub async fn insert(&self, data: &CustomerData) -> Result<CustomerId> {
        let id = sqlx::query_scalar::<_, CustomerId>(
            r#"
            INSERT INTO customers (first_name, last_name, phone, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.phone.as_deref())
        .bind(&data.notes)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Overwrite every writable column. Last writer wins.
    pub async fn update(&self, id: CustomerId, data: &CustomerData) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = $1,
                last_name = $2,
                phone = $3,
                notes = $4
            WHERE id = $5
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.phone.as_deref())
        .bind(&data.notes)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("customer", id));
        }
        Ok(())
    }
}
