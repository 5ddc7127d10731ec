//! Database layer - store trait, connection pool and repositories
//!
//! # Design Principles
//!
//! - Entities never hold a connection; every operation takes a `&dyn Store`
//! - Every save is a single statement, no multi-step transactions
//! - Missing rows come back as `Error::NotFound`, never as an empty record
//! - `MemoryStore` honours the same not-found contract as `PgStore`, and the
//!   same orderings under the `C` collation (names compare byte-wise)

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod records;
pub mod repos;

use async_trait::async_trait;

use crate::models::{CustomerId, ReservationId};
use crate::Result;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use records::{
    CustomerData, CustomerRecord, RankedCustomerRecord, ReservationData, ReservationRecord,
};
pub use repos::PgStore;
pub use sqlx::PgPool;

/// Persistence operations the entities are written against.
///
/// List operations define their own ordering:
/// - customers: last name, first name, id
/// - top customers: reservation count descending, then last name, first name, id
/// - reservations: start time, id
#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap round-trip used by the health check.
    async fn ping(&self) -> Result<()>;

    async fn all_customers(&self) -> Result<Vec<CustomerRecord>>;

    async fn get_customer(&self, id: CustomerId) -> Result<CustomerRecord>;

    /// Case-insensitive substring match on "first last".
    async fn search_customers(&self, term: &str) -> Result<Vec<CustomerRecord>>;

    /// Customers with at least one reservation, most reservations first.
    async fn top_customers(&self, limit: u32) -> Result<Vec<RankedCustomerRecord>>;

    async fn insert_customer(&self, data: &CustomerData) -> Result<CustomerId>;

    async fn update_customer(&self, id: CustomerId, data: &CustomerData) -> Result<()>;

    async fn reservations_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ReservationRecord>>;

    async fn get_reservation(&self, id: ReservationId) -> Result<ReservationRecord>;

    async fn insert_reservation(&self, data: &ReservationData) -> Result<ReservationId>;

    /// Updates guests, start time and notes. The customer id is never rewritten.
    async fn update_reservation(&self, id: ReservationId, data: &ReservationData) -> Result<()>;
}

/// Escape LIKE wildcards so a search term matches literally.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_wildcards() {
        assert_eq!(escape_like("smith"), "smith");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
