use crate::commands::{display_records, status_of, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &RecordStore) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed_records(display_records(store.list()))
        .with_status(status_of(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn lists_in_current_order_with_positions() {
        let fixture = StoreFixture::tower_sample();
        let result = run(&fixture.store).unwrap();

        let listed: Vec<_> = result
            .listed_records
            .iter()
            .map(|dp| (dp.position, dp.record.name.as_str()))
            .collect();
        assert_eq!(listed, vec![(1, "Motor"), (2, "Antena"), (3, "motor")]);

        let status = result.status.unwrap();
        assert_eq!(status.len, 3);
        assert_eq!(status.capacity, 20);
        assert_eq!(status.order, Order::Unordered);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store).unwrap();
        assert!(result.listed_records.is_empty());
        assert!(result.messages.is_empty());
    }
}
