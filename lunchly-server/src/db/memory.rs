//! In-process `Store` for tests and database-free demo runs
//!
//! Mirrors the Postgres repositories: same not-found behaviour, ids handed
//! out from 1 upwards. Names sort byte-wise, which matches Postgres only
//! under the `C` collation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::{
    CustomerData, CustomerRecord, RankedCustomerRecord, ReservationData, ReservationRecord, Store,
};
use crate::models::{CustomerId, ReservationId};
use crate::{Error, Result};

#[derive(Default)]
struct Tables {
    customers: Vec<CustomerRecord>,
    reservations: Vec<ReservationRecord>,
    next_customer_id: i32,
    next_reservation_id: i32,
}

impl Tables {
    fn customer_mut(&mut self, id: CustomerId) -> Result<&mut CustomerRecord> {
        self.customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::not_found("customer", id))
    }

    fn reservation_mut(&mut self, id: ReservationId) -> Result<&mut ReservationRecord> {
        self.reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::not_found("reservation", id))
    }
}

/// `Store` held entirely in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Byte-wise, so uppercase sorts before lowercase.
fn by_name(a: &CustomerRecord, b: &CustomerRecord) -> std::cmp::Ordering {
    (&a.last_name, &a.first_name, a.id).cmp(&(&b.last_name, &b.first_name, b.id))
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn all_customers(&self) -> Result<Vec<CustomerRecord>> {
        let tables = self.tables.read().await;
        let mut rows = tables.customers.clone();
        rows.sort_by(by_name);
        Ok(rows)
    }

    async fn get_customer(&self, id: CustomerId) -> Result<CustomerRecord> {
        let tables = self.tables.read().await;
        tables
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found("customer", id))
    }

    async fn search_customers(&self, term: &str) -> Result<Vec<CustomerRecord>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables
            .customers
            .iter()
            .filter(|c| {
                format!("{} {}", c.first_name, c.last_name)
                    .to_lowercase()
                    .contains(&needle)
            })
            .cloned()
            .collect();
        rows.sort_by(by_name);
        Ok(rows)
    }

    async fn top_customers(&self, limit: u32) -> Result<Vec<RankedCustomerRecord>> {
        let tables = self.tables.read().await;

        let mut counts: HashMap<CustomerId, i64> = HashMap::new();
        for r in &tables.reservations {
            *counts.entry(r.customer_id).or_default() += 1;
        }

        let mut ranked: Vec<_> = tables
            .customers
            .iter()
            .filter_map(|c| {
                counts.get(&c.id).map(|&reservation_count| RankedCustomerRecord {
                    customer: c.clone(),
                    reservation_count,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.reservation_count
                .cmp(&a.reservation_count)
                .then_with(|| by_name(&a.customer, &b.customer))
        });
        ranked.truncate(limit as usize);
        Ok(ranked)
    }

    async fn insert_customer(&self, data: &CustomerData) -> Result<CustomerId> {
        let mut tables = self.tables.write().await;
        tables.next_customer_id += 1;
        let id = CustomerId::new(tables.next_customer_id);
        tables.customers.push(data.clone().into_record(id));
        Ok(id)
    }

    async fn update_customer(&self, id: CustomerId, data: &CustomerData) -> Result<()> {
        let mut tables = self.tables.write().await;
        *tables.customer_mut(id)? = data.clone().into_record(id);
        Ok(())
    }

    async fn reservations_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ReservationRecord>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables
            .reservations
            .iter()
            .filter(|r| r.customer_id == customer_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| (r.start_at, r.id));
        Ok(rows)
    }

    async fn get_reservation(&self, id: ReservationId) -> Result<ReservationRecord> {
        let tables = self.tables.read().await;
        tables
            .reservations
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found("reservation", id))
    }

    async fn insert_reservation(&self, data: &ReservationData) -> Result<ReservationId> {
        let mut tables = self.tables.write().await;
        // Stand-in for the foreign key
        tables.customer_mut(data.customer_id)?;
        tables.next_reservation_id += 1;
        let id = ReservationId::new(tables.next_reservation_id);
        tables.reservations.push(data.clone().into_record(id));
        Ok(id)
    }

    async fn update_reservation(&self, id: ReservationId, data: &ReservationData) -> Result<()> {
        let mut tables = self.tables.write().await;
        let row = tables.reservation_mut(id)?;
        row.num_guests = data.num_guests;
        row.start_at = data.start_at;
        row.notes = data.notes.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn customer(first: &str, last: &str) -> CustomerData {
        CustomerData {
            first_name: first.into(),
            last_name: last.into(),
            phone: None,
            notes: String::new(),
        }
    }

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, day)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap()
    }

    fn booking(customer_id: CustomerId, day: u32) -> ReservationData {
        ReservationData {
            customer_id,
            num_guests: 2,
            start_at: at(day),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn ids_start_at_one() {
        let store = MemoryStore::new();
        let a = store.insert_customer(&customer("A", "A")).await.unwrap();
        let b = store.insert_customer(&customer("B", "B")).await.unwrap();
        assert_eq!((a.get(), b.get()), (1, 2));

        let r = store.insert_reservation(&booking(a, 1)).await.unwrap();
        assert_eq!(r.get(), 1);
    }

    #[tokio::test]
    async fn all_sorted_by_last_then_first() {
        let store = MemoryStore::new();
        store.insert_customer(&customer("Zoe", "Adams")).await.unwrap();
        store.insert_customer(&customer("Carl", "Baker")).await.unwrap();
        store.insert_customer(&customer("Abe", "Adams")).await.unwrap();

        let names: Vec<_> = store
            .all_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| format!("{} {}", c.first_name, c.last_name))
            .collect();
        assert_eq!(names, ["Abe Adams", "Zoe Adams", "Carl Baker"]);
    }

    #[tokio::test]
    async fn names_compare_byte_wise() {
        let store = MemoryStore::new();
        store.insert_customer(&customer("Jan", "de Vries")).await.unwrap();
        store.insert_customer(&customer("Ida", "Zimmer")).await.unwrap();

        let last: Vec<_> = store
            .all_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.last_name)
            .collect();
        assert_eq!(last, ["Zimmer", "de Vries"]);
    }

    #[tokio::test]
    async fn search_matches_across_first_and_last() {
        let store = MemoryStore::new();
        store.insert_customer(&customer("Mary", "Ann")).await.unwrap();
        store.insert_customer(&customer("Maryann", "Lee")).await.unwrap();
        store.insert_customer(&customer("Bob", "Roberts")).await.unwrap();

        let hits = store.search_customers("y a").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Mary");

        let hits = store.search_customers("ROB").await.unwrap();
        assert_eq!(hits.len(), 1);

        assert!(store.search_customers("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn top_customers_ranks_and_truncates() {
        let store = MemoryStore::new();
        let a = store.insert_customer(&customer("A", "Able")).await.unwrap();
        let b = store.insert_customer(&customer("B", "Baker")).await.unwrap();
        let c = store.insert_customer(&customer("C", "Cane")).await.unwrap();
        let _d = store.insert_customer(&customer("D", "Dole")).await.unwrap();

        for (id, n) in [(c, 1), (a, 5), (b, 3)] {
            for day in 1..=n {
                store.insert_reservation(&booking(id, day)).await.unwrap();
            }
        }

        let top = store.top_customers(3).await.unwrap();
        let order: Vec<_> = top.iter().map(|r| r.customer.id).collect();
        assert_eq!(order, [a, b, c]);
        assert_eq!(top[0].reservation_count, 5);

        assert_eq!(store.top_customers(2).await.unwrap().len(), 2);
        assert_eq!(store.top_customers(10).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn top_customers_breaks_ties_by_name() {
        let store = MemoryStore::new();
        let z = store.insert_customer(&customer("Zed", "Young")).await.unwrap();
        let a = store.insert_customer(&customer("Al", "Young")).await.unwrap();
        store.insert_reservation(&booking(z, 1)).await.unwrap();
        store.insert_reservation(&booking(a, 1)).await.unwrap();

        let order: Vec<_> = store
            .top_customers(10)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.customer.id)
            .collect();
        assert_eq!(order, [a, z]);
    }

    #[tokio::test]
    async fn reservations_sorted_by_start() {
        let store = MemoryStore::new();
        let id = store.insert_customer(&customer("A", "B")).await.unwrap();
        for day in [15, 2, 9] {
            store.insert_reservation(&booking(id, day)).await.unwrap();
        }

        let days: Vec<_> = store
            .reservations_for_customer(id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.start_at)
            .collect();
        assert_eq!(days, [at(2), at(9), at(15)]);
    }

    #[tokio::test]
    async fn reservation_requires_existing_customer() {
        let store = MemoryStore::new();
        let err = store
            .insert_reservation(&booking(CustomerId::new(77), 1))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_reservation_ignores_customer_id() {
        let store = MemoryStore::new();
        let owner = store.insert_customer(&customer("A", "B")).await.unwrap();
        let other = store.insert_customer(&customer("C", "D")).await.unwrap();
        let id = store.insert_reservation(&booking(owner, 1)).await.unwrap();

        let mut change = booking(other, 4);
        change.num_guests = 8;
        store.update_reservation(id, &change).await.unwrap();

        let row = store.get_reservation(id).await.unwrap();
        assert_eq!(row.customer_id, owner);
        assert_eq!(row.num_guests, 8);
        assert_eq!(row.start_at, at(4));
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let store = MemoryStore::new();
        assert!(store.get_customer(CustomerId::new(1)).await.unwrap_err().is_not_found());
        assert!(store
            .get_reservation(ReservationId::new(1))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store
            .update_customer(CustomerId::new(1), &customer("X", "Y"))
            .await
            .unwrap_err()
            .is_not_found());
    }
}
