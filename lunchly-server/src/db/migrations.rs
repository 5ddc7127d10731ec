//! Schema setup for the customers and reservations tables

use sqlx::PgPool;

use crate::Result;

/// Create tables and indexes if they don't exist yet.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running lunchly migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id SERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            phone TEXT,
            notes TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id SERIAL PRIMARY KEY,
            customer_id INTEGER NOT NULL REFERENCES customers(id),
            start_at TIMESTAMP NOT NULL,
            num_guests INTEGER NOT NULL CHECK (num_guests >= 1),
            notes TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("lunchly migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_reservations_customer ON reservations(customer_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_customers_name ON customers(last_name, first_name)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
