use crate::commands::{display_records, status_of, CmdMessage, CmdResult};
use crate::error::Result;
use crate::sort::{self, SortKey};
use crate::store::RecordStore;
use tracing::info;

pub fn run(store: &mut RecordStore, key: SortKey) -> Result<CmdResult> {
    let report = sort::sort(store, key);
    info!(%key, comparisons = report.comparisons, "records sorted");

    let mut result = CmdResult::default()
        .with_sort_report(report)
        .with_listed_records(display_records(store.list()))
        .with_status(status_of(store));
    result.add_message(CmdMessage::success(format!(
        "{} finished.",
        capitalize(&key.to_string())
    )));
    if key != SortKey::Name {
        result.add_message(CmdMessage::info(
            "Binary search needs the records sorted by name.",
        ));
    }
    Ok(result)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn reports_metrics_and_new_order() {
        let mut fixture = StoreFixture::tower_sample();
        let result = run(&mut fixture.store, SortKey::Priority).unwrap();

        let report = result.sort_report.unwrap();
        assert_eq!(report.comparisons, 3);
        assert_eq!(result.status.unwrap().order, Order::ByPriority);

        let priorities: Vec<u8> = result
            .listed_records
            .iter()
            .map(|dp| dp.record.priority.get())
            .collect();
        assert_eq!(priorities, vec![2, 5, 9]);
        assert_eq!(
            result.messages[0].content,
            "Selection sort by priority finished."
        );
    }

    #[test]
    fn name_sort_has_no_search_hint() {
        let mut fixture = StoreFixture::tower_sample();
        let result = run(&mut fixture.store, SortKey::Name).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.status.unwrap().order, Order::ByName);
    }

    #[test]
    fn empty_store_still_reports() {
        let mut fixture = StoreFixture::new();
        let result = run(&mut fixture.store, SortKey::Category).unwrap();
        assert_eq!(result.sort_report.unwrap().comparisons, 0);
        assert!(result.listed_records.is_empty());
    }
}
