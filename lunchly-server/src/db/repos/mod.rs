//! Postgres repositories and the `Store` implementation built on them
//!
//! Each repository borrows the pool and issues one statement per call.

pub mod customers;
pub mod reservations;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{
    CustomerData, CustomerRecord, RankedCustomerRecord, ReservationData, ReservationRecord, Store,
};
use crate::models::{CustomerId, ReservationId};
use crate::Result;

pub use customers::CustomerRepo;
pub use reservations::ReservationRepo;

/// `Store` backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn customers(&self) -> CustomerRepo<'_> {
        CustomerRepo::new(&self.pool)
    }

    fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(&self.pool)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn all_customers(&self) -> Result<Vec<CustomerRecord>> {
        self.customers().all().await
    }

    async fn get_customer(&self, id: CustomerId) -> Result<CustomerRecord> {
        self.customers().get(id).await
    }

    async fn search_customers(&self, term: &str) -> Result<Vec<CustomerRecord>> {
        self.customers().search(term).await
    }

    async fn top_customers(&self, limit: u32) -> Result<Vec<RankedCustomerRecord>> {
        self.customers().top(limit).await
    }

    async fn insert_customer(&self, data: &CustomerData) -> Result<CustomerId> {
        self.customers().insert(data).await
    }

    async fn update_customer(&self, id: CustomerId, data: &CustomerData) -> Result<()> {
        self.customers().update(id, data).await
    }

    async fn reservations_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ReservationRecord>> {
        self.reservations().for_customer(customer_id).await
    }

    async fn get_reservation(&self, id: ReservationId) -> Result<ReservationRecord> {
        self.reservations().get(id).await
    }

    async fn insert_reservation(&self, data: &ReservationData) -> Result<ReservationId> {
        self.reservations().insert(data).await
    }

    async fn update_reservation(&self, id: ReservationId, data: &ReservationData) -> Result<()> {
        self.reservations().update(id, data).await
    }
}
