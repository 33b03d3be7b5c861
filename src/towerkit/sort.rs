//! # Sorters
//!
//! Three textbook in-place sorts, one per record field:
//!
//! | key        | algorithm      | stable |
//! |------------|----------------|--------|
//! | name       | bubble sort    | yes    |
//! | category   | insertion sort | yes    |
//! | priority   | selection sort | no     |
//!
//! Each returns a [`SortReport`] with the number of element comparisons and
//! the time spent in the algorithm body (measured with [`Instant`], so it is
//! monotonic and excludes any I/O). Name and category comparisons go through
//! [`crate::collation`]. Elements only move past strictly greater keys, so
//! records with equal names or equal categories keep their input order.

use crate::collation;
use crate::model::{Order, Record};
use crate::store::RecordStore;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Category,
    Priority,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Category, SortKey::Priority];

    pub fn algorithm(self) -> &'static str {
        match self {
            SortKey::Name => "bubble sort",
            SortKey::Category => "insertion sort",
            SortKey::Priority => "selection sort",
        }
    }

    pub fn order(self) -> Order {
        match self {
            SortKey::Name => Order::ByName,
            SortKey::Category => Order::ByCategory,
            SortKey::Priority => Order::ByPriority,
        }
    }

    pub fn field(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Priority => "priority",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.algorithm(), self.field())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    pub key: SortKey,
    pub comparisons: u64,
    pub elapsed: Duration,
}

pub fn sort(store: &mut RecordStore, key: SortKey) -> SortReport {
    match key {
        SortKey::Name => sort_by_name(store),
        SortKey::Category => sort_by_category(store),
        SortKey::Priority => sort_by_priority(store),
    }
}

/// Bubble sort by case-folded name. Stops after the first pass without swaps.
/// This is the only sort that enables binary search.
pub fn sort_by_name(store: &mut RecordStore) -> SortReport {
    timed(store, SortKey::Name, bubble_by_name)
}

/// Insertion sort by case-folded category.
pub fn sort_by_category(store: &mut RecordStore) -> SortReport {
    timed(store, SortKey::Category, insertion_by_category)
}

/// Selection sort by priority value, 1 first.
pub fn sort_by_priority(store: &mut RecordStore) -> SortReport {
    timed(store, SortKey::Priority, selection_by_priority)
}

fn timed(store: &mut RecordStore, key: SortKey, body: fn(&mut [Record]) -> u64) -> SortReport {
    let mut elapsed = Duration::ZERO;
    let comparisons = store.reorder(key.order(), |records| {
        let start = Instant::now();
        let comparisons = body(records);
        elapsed = start.elapsed();
        comparisons
    });
    debug!(%key, comparisons, ?elapsed, "sort finished");
    SortReport {
        key,
        comparisons,
        elapsed,
    }
}

fn bubble_by_name(records: &mut [Record]) -> u64 {
    let n = records.len();
    let mut comparisons = 0;

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            comparisons += 1;
            if collation::is_after(&records[j].name, &records[j + 1].name) {
                records.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    comparisons
}

fn insertion_by_category(records: &mut [Record]) -> u64 {
    let mut comparisons = 0;

    for i in 1..records.len() {
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if collation::is_after(&records[j - 1].category, &records[j].category) {
                records.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }

    comparisons
}

fn selection_by_priority(records: &mut [Record]) -> u64 {
    let n = records.len();
    let mut comparisons = 0;

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            comparisons += 1;
            if records[j].priority < records[min].priority {
                min = j;
            }
        }
        if min != i {
            records.swap(i, min);
        }
    }

    comparisons
}
