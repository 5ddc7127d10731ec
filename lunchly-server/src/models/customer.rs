//! Customer entity
//!
//! A restaurant customer. Reservations are not held here; they are
//! fetched from the store when asked for.

use crate::db::{CustomerData, CustomerRecord, RankedCustomerRecord, Store};
use crate::Result;

use super::{normalize_notes, CustomerId, Identity, Reservation};

/// Rows shown on the top-customers report unless asked otherwise
pub const TOP_CUSTOMERS_DEFAULT_LIMIT: u32 = 10;

/// Customer of the restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    identity: Identity<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    notes: String,
}

/// A customer together with how many reservations they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCustomer {
    pub customer: Customer,
    pub reservation_count: i64,
}

impl Customer {
    /// A customer that has not been saved yet.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            identity: Identity::Unsaved,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone,
            notes: normalize_notes(notes),
        }
    }

    /// Id assigned by the store, `None` until the first save.
    pub fn id(&self) -> Option<CustomerId> {
        self.identity.id()
    }

    pub fn identity(&self) -> Identity<CustomerId> {
        self.identity
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = normalize_notes(notes);
    }

    /// All customers, ordered by last name then first name.
    pub async fn all(store: &dyn Store) -> Result<Vec<Self>> {
        let rows = store.all_customers().await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }

    /// Fetch one customer; `Error::NotFound` if the id is unknown.
    pub async fn get(store: &dyn Store, id: CustomerId) -> Result<Self> {
        store.get_customer(id).await.map(Self::from)
    }

    /// Customers whose full name contains `term`, ignoring case.
    ///
    /// No match is an empty list, not an error.
    pub async fn filter_by_name(store: &dyn Store, term: &str) -> Result<Vec<Self>> {
        tracing::debug!(search = %term, "filtering customers by name");
        let rows = store.search_customers(term).await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }

    /// Customers with the most reservations, at most `limit` of them.
    ///
    /// Equal counts are ordered by last name, first name, then id.
    pub async fn filter_top_customers(store: &dyn Store, limit: u32) -> Result<Vec<RankedCustomer>> {
        let rows = store.top_customers(limit).await?;
        Ok(rows.into_iter().map(RankedCustomer::from).collect())
    }

    /// This customer's reservations, earliest first. Empty for an unsaved customer.
    pub async fn get_reservations(&self, store: &dyn Store) -> Result<Vec<Reservation>> {
        match self.identity {
            Identity::Unsaved => Ok(Vec::new()),
            Identity::Saved(id) => Reservation::get_reservations_for_customer(store, id).await,
        }
    }

    /// Insert when unsaved (adopting the new id), otherwise overwrite by id.
    pub async fn save(&mut self, store: &dyn Store) -> Result<CustomerId> {
        let data = self.data();
        match self.identity {
            Identity::Unsaved => {
                let id = store.insert_customer(&data).await?;
                tracing::debug!(customer_id = %id, "customer created");
                self.identity = Identity::Saved(id);
                Ok(id)
            }
            Identity::Saved(id) => {
                store.update_customer(id, &data).await?;
                tracing::debug!(customer_id = %id, "customer updated");
                Ok(id)
            }
        }
    }

    fn data(&self) -> CustomerData {
        CustomerData {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl From<CustomerRecord> for Customer {
    fn from(row: CustomerRecord) -> Self {
        Self {
            identity: Identity::Saved(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            notes: row.notes,
        }
    }
}

impl From<RankedCustomerRecord> for RankedCustomer {
    fn from(row: RankedCustomerRecord) -> Self {
        Self {
            customer: Customer::from(row.customer),
            reservation_count: row.reservation_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn ada() -> Customer {
        Customer::new("Ada", "Lovelace", Some("555-0100".into()), Some("regular".into()))
    }

    #[test]
    fn full_name_joins_names() {
        assert_eq!(ada().full_name(), "Ada Lovelace");
    }

    #[test]
    fn notes_are_never_absent() {
        let mut c = Customer::new("A", "B", None, None);
        assert_eq!(c.notes(), "");

        c.set_notes(Some("likes the patio".into()));
        assert_eq!(c.notes(), "likes the patio");

        c.set_notes(None);
        assert_eq!(c.notes(), "");
    }

    #[tokio::test]
    async fn save_inserts_then_updates() {
        let store = MemoryStore::new();
        let mut c = ada();
        assert_eq!(c.identity(), Identity::Unsaved);

        let id = c.save(&store).await.unwrap();
        assert_eq!(c.id(), Some(id));

        c.first_name = "Augusta".into();
        c.set_notes(None);
        assert_eq!(c.save(&store).await.unwrap(), id);

        let fetched = Customer::get(&store, id).await.unwrap();
        assert_eq!(fetched.full_name(), "Augusta Lovelace");
        assert_eq!(fetched.notes(), "");
        assert_eq!(Customer::all(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn round_trips_all_fields() {
        let store = MemoryStore::new();
        let mut c = ada();
        let id = c.save(&store).await.unwrap();

        let fetched = Customer::get(&store, id).await.unwrap();
        assert_eq!(fetched, c);
        assert_eq!(fetched.phone.as_deref(), Some("555-0100"));
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let store = MemoryStore::new();
        let err = Customer::get(&store, CustomerId::new(5)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn filter_by_name_matches_first_or_last() {
        let store = MemoryStore::new();
        for (first, last) in [("Jo", "Smith"), ("Smithy", "Adams"), ("Al", "Brown"), ("Ann", "Blacksmith")] {
            Customer::new(first, last, None, None).save(&store).await.unwrap();
        }

        let names: Vec<_> = Customer::filter_by_name(&store, "smith")
            .await
            .unwrap()
            .iter()
            .map(Customer::full_name)
            .collect();
        assert_eq!(names, ["Smithy Adams", "Ann Blacksmith", "Jo Smith"]);

        assert!(Customer::filter_by_name(&store, "nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unsaved_customer_has_no_reservations() {
        let store = MemoryStore::new();
        assert!(ada().get_reservations(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn top_customers_in_count_order() {
        let store = MemoryStore::new();
        let mut ids = Vec::new();
        for (first, last) in [("A", "Ames"), ("B", "Bell"), ("C", "Cobb"), ("D", "Dorn")] {
            ids.push(Customer::new(first, last, None, None).save(&store).await.unwrap());
        }

        for (idx, count) in [(0, 5), (1, 3), (2, 1)] {
            for _ in 0..count {
                Reservation::new(ids[idx], "2024-04-01T18:00", 2, None)
                    .unwrap()
                    .save(&store)
                    .await
                    .unwrap();
            }
        }

        let top = Customer::filter_top_customers(&store, 3).await.unwrap();
        let names: Vec<_> = top.iter().map(|r| r.customer.last_name.as_str()).collect();
        assert_eq!(names, ["Ames", "Bell", "Cobb"]);
        let counts: Vec<_> = top.iter().map(|r| r.reservation_count).collect();
        assert_eq!(counts, [5, 3, 1]);
    }
}
