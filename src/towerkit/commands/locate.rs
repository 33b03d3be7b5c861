use crate::commands::{status_of, CmdMessage, CmdResult};
use crate::error::{Result, TowerError};
use crate::locate::locate;
use crate::store::RecordStore;
use tracing::info;

/// Binary search for `query`. A miss is not an error here: the result
/// carries a warning with the number of probes spent, since that is what the
/// user wants to see. Searching a store not sorted by name is an error.
pub fn run(store: &RecordStore, query: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_status(status_of(store));

    match locate(store, query) {
        Ok(located) => {
            info!(query, found = true, comparisons = located.comparisons, "lookup");
            result.add_message(CmdMessage::success(format!(
                "Found at position {}: {} ({} comparisons)",
                located.index + 1,
                located.record.name,
                located.comparisons
            )));
            result.located = Some(located);
        }
        Err(TowerError::NotFound {
            comparisons: Some(comparisons),
            ..
        }) => {
            info!(query, found = false, comparisons, "lookup");
            result.add_message(CmdMessage::warning(format!(
                "Record '{}' not found ({} comparisons)",
                query, comparisons
            )));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::sort::sort_by_name;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn hit_carries_located_record() {
        let mut fixture = StoreFixture::tower_sample();
        sort_by_name(&mut fixture.store);

        let result = run(&fixture.store, "ANTENA").unwrap();
        let located = result.located.unwrap();
        assert_eq!(located.index, 0);
        assert_eq!(located.record.category, "controle");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn miss_is_a_warning_with_comparison_count() {
        let mut fixture = StoreFixture::tower_sample();
        sort_by_name(&mut fixture.store);

        let result = run(&fixture.store, "Painel").unwrap();
        assert!(result.located.is_none());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[0].content,
            "Record 'Painel' not found (2 comparisons)"
        );
    }

    #[test]
    fn unsorted_store_is_rejected() {
        let fixture = StoreFixture::tower_sample();
        assert!(matches!(
            run(&fixture.store, "Antena"),
            Err(TowerError::PreconditionViolated { .. })
        ));
    }
}
