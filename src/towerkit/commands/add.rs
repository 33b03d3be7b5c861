use crate::commands::{display_records, status_of, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Priority, Record};
use crate::store::RecordStore;
use tracing::info;

pub fn run(
    store: &mut RecordStore,
    name: String,
    category: String,
    priority: Priority,
) -> Result<CmdResult> {
    let record = Record::new(name, category, priority);
    store.add(record.clone())?;
    info!(name = %record.name, "record registered");

    let mut result = CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_listed_records(display_records(store.list()))
        .with_status(status_of(store));
    result.add_message(CmdMessage::success(format!(
        "Record added ({}/{}): {}",
        store.len(),
        store.capacity(),
        record.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TowerError;
    use crate::model::Order;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn adds_record_and_lists_store() {
        let mut store = RecordStore::new();
        let result = run(
            &mut store,
            "Antena".into(),
            "controle".into(),
            Priority::new(2).unwrap(),
        )
        .unwrap();

        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.affected_records[0].name, "Antena");
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].position, 1);
        assert_eq!(result.status.unwrap().order, Order::Unordered);
        assert!(result.messages[0].content.contains("(1/20)"));
    }

    #[test]
    fn full_store_is_an_error() {
        let mut fixture = StoreFixture::with_capacity(1).with_record("Motor", "propulsao", 5);
        let err = run(
            &mut fixture.store,
            "Antena".into(),
            "controle".into(),
            Priority::HIGHEST,
        )
        .unwrap_err();

        assert!(matches!(err, TowerError::Full { capacity: 1 }));
        assert_eq!(fixture.names(), vec!["Motor"]);
    }
}
