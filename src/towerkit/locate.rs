//! Binary search by name.
//!
//! [`locate`] only runs while the store's marker says [`Order::ByName`]. It
//! trusts the marker and never re-checks that the records really are sorted.

use crate::collation;
use crate::error::{Result, TowerError};
use crate::model::{Order, Record};
use crate::store::RecordStore;
use std::cmp::Ordering;
use tracing::debug;

/// Outcome of a raw search: where the match is, if anywhere, and how many
/// midpoints were probed to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub found: Option<usize>,
    pub comparisons: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub index: usize,
    pub record: Record,
    pub comparisons: u64,
}

/// Classic binary search over `records`, which must already be ordered by
/// case-folded name. Returns whichever match the probes land on first, which
/// for duplicate names is not necessarily the earliest one.
pub fn binary_search_by_name(records: &[Record], query: &str) -> Probe {
    let mut comparisons = 0;
    let mut low = 0;
    let mut high = records.len();

    // Half-open interval [low, high); empty when low == high.
    while low < high {
        let mid = low + (high - low - 1) / 2;
        comparisons += 1;
        match collation::compare(&records[mid].name, query) {
            Ordering::Equal => {
                return Probe {
                    found: Some(mid),
                    comparisons,
                }
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    Probe {
        found: None,
        comparisons,
    }
}

/// Find `query` in a store that was last sorted by name.
///
/// Fails with [`TowerError::PreconditionViolated`] without probing when the
/// marker says anything else, and with [`TowerError::NotFound`] when no
/// record matches. A miss still reports the comparisons it spent.
pub fn locate(store: &RecordStore, query: &str) -> Result<Located> {
    store.ensure_order(Order::ByName)?;

    let probe = binary_search_by_name(store.list(), query);
    debug!(query, ?probe, "binary search finished");

    match probe.found {
        Some(index) => Ok(Located {
            index,
            record: store.list()[index].clone(),
            comparisons: probe.comparisons,
        }),
        None => Err(TowerError::NotFound {
            name: query.to_string(),
            comparisons: Some(probe.comparisons),
        }),
    }
}
