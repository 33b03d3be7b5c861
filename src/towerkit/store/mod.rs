//! # Record Store
//!
//! [`RecordStore`] is the bounded, ordered collection every operation works on.
//! Records keep insertion order until a sorter reorders them.
//!
//! ## The Order Marker
//!
//! The store remembers which sort, if any, last produced its current order
//! ([`Order`]). The marker is a contract rather than a derived fact:
//!
//! - `add` and `remove_by_name` reset it to [`Order::Unordered`]
//! - the sorters in [`crate::sort`] set it to their own order
//! - nothing else touches it
//!
//! Binary search ([`crate::locate`]) is only valid while the marker says
//! [`Order::ByName`]; see [`RecordStore::ensure_order`].
//!
//! ## Capacity
//!
//! The store never grows past its capacity. [`DEFAULT_CAPACITY`] matches the
//! twenty slots the tower kit has always had; the CLI can configure another
//! bound.

use crate::collation;
use crate::error::{Result, TowerError};
use crate::model::{Order, Record};
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    capacity: usize,
    last_order: Order,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
            last_order: Order::Unordered,
        }
    }

    /// Append a record. Fails with [`TowerError::Full`] and leaves the store
    /// untouched when there is no room left.
    pub fn add(&mut self, record: Record) -> Result<()> {
        if self.is_full() {
            return Err(TowerError::Full {
                capacity: self.capacity,
            });
        }
        debug!(name = %record.name, len = self.records.len() + 1, "record added");
        self.records.push(record);
        self.last_order = Order::Unordered;
        Ok(())
    }

    /// Remove the first record whose name matches `name` case-insensitively.
    /// The remaining records keep their relative order.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Record> {
        let position = self
            .records
            .iter()
            .position(|r| collation::equals(&r.name, name))
            .ok_or_else(|| TowerError::NotFound {
                name: name.to_string(),
                comparisons: None,
            })?;

        let removed = self.records.remove(position);
        debug!(name = %removed.name, position, "record removed");
        self.last_order = Order::Unordered;
        Ok(removed)
    }

    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn last_order(&self) -> Order {
        self.last_order
    }

    /// Check the order marker before an operation that depends on it.
    pub fn ensure_order(&self, required: Order) -> Result<()> {
        if self.last_order == required {
            Ok(())
        } else {
            Err(TowerError::PreconditionViolated {
                current: self.last_order,
            })
        }
    }

    /// Reorder the records in place and record which order now holds.
    /// Only the sorters call this.
    pub(crate) fn reorder<F>(&mut self, order: Order, body: F) -> u64
    where
        F: FnOnce(&mut [Record]) -> u64,
    {
        let comparisons = body(&mut self.records);
        self.last_order = order;
        comparisons
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::fixtures::{record, StoreFixture};
    use super::*;

    #[test]
    fn starts_empty_and_unordered() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
        assert_eq!(store.last_order(), Order::Unordered);
    }

    #[test]
    fn add_grows_by_one_and_resets_order() {
        let mut store = RecordStore::new();
        for i in 0..5 {
            store.reorder(Order::ByName, |_| 0);
            store
                .add(record(&format!("part-{}", i), "suporte", 3))
                .unwrap();
            assert_eq!(store.len(), i + 1);
            assert_eq!(store.last_order(), Order::Unordered);
        }
    }

    #[test]
    fn add_beyond_capacity_fails_and_leaves_store_unchanged() {
        let mut fixture = StoreFixture::with_capacity(2)
            .with_record("A", "x", 1)
            .with_record("B", "y", 2);
        fixture.store.reorder(Order::ByName, |_| 0);

        match fixture.store.add(record("C", "z", 3)) {
            Err(TowerError::Full { capacity }) => assert_eq!(capacity, 2),
            other => panic!("Expected Full, got {:?}", other),
        }
        assert_eq!(fixture.names(), vec!["A", "B"]);
        assert_eq!(fixture.store.last_order(), Order::ByName);
        assert!(fixture.store.is_full());
    }

    #[test]
    fn remove_takes_first_case_insensitive_match() {
        let mut fixture = StoreFixture::tower_sample();
        let removed = fixture.store.remove_by_name("MOTOR").unwrap();

        assert_eq!(removed.category, "propulsao");
        assert_eq!(fixture.names(), vec!["Antena", "motor"]);
        assert_eq!(fixture.store.last_order(), Order::Unordered);
    }

    #[test]
    fn remove_preserves_relative_order_of_the_rest() {
        let mut fixture = StoreFixture::new()
            .with_record("A", "x", 1)
            .with_record("B", "x", 1)
            .with_record("C", "x", 1);
        fixture.store.remove_by_name("b").unwrap();
        assert_eq!(fixture.names(), vec!["A", "C"]);
    }

    #[test]
    fn remove_missing_name_fails_and_leaves_store_unchanged() {
        let mut fixture = StoreFixture::tower_sample();
        fixture.store.reorder(Order::ByPriority, |_| 0);

        match fixture.store.remove_by_name("Painel") {
            Err(TowerError::NotFound { name, comparisons }) => {
                assert_eq!(name, "Painel");
                assert_eq!(comparisons, None);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert_eq!(fixture.names(), vec!["Motor", "Antena", "motor"]);
        assert_eq!(fixture.store.last_order(), Order::ByPriority);
    }

    #[test]
    fn ensure_order_reports_current_marker() {
        let mut store = RecordStore::new();
        match store.ensure_order(Order::ByName) {
            Err(TowerError::PreconditionViolated { current }) => {
                assert_eq!(current, Order::Unordered)
            }
            other => panic!("Expected PreconditionViolated, got {:?}", other),
        }
        store.reorder(Order::ByName, |_| 0);
        assert!(store.ensure_order(Order::ByName).is_ok());
    }
}
