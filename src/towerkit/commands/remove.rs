use crate::commands::{display_records, status_of, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use tracing::info;

pub fn run(store: &mut RecordStore, name: &str) -> Result<CmdResult> {
    let removed = store.remove_by_name(name)?;
    info!(name = %removed.name, "record removed");

    let mut result = CmdResult::default()
        .with_affected_records(vec![removed.clone()])
        .with_listed_records(display_records(store.list()))
        .with_status(status_of(store));
    result.add_message(CmdMessage::success(format!(
        "Record removed: {}",
        removed.name
    )));
    Ok(result)
}
