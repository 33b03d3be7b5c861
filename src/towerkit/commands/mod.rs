use crate::config::TowerConfig;
use crate::locate::Located;
use crate::model::{Order, Record};
use crate::sort::SortReport;

pub mod add;
pub mod config;
pub mod list;
pub mod locate;
pub mod remove;
pub mod sort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record as shown to the user, with its 1-based position in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub position: usize,
    pub record: Record,
}

pub fn display_records(records: &[Record]) -> Vec<DisplayRecord> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            position: i + 1,
            record: record.clone(),
        })
        .collect()
}

/// Snapshot of the store taken after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStatus {
    pub len: usize,
    pub capacity: usize,
    pub order: Order,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<DisplayRecord>,
    pub status: Option<StoreStatus>,
    pub sort_report: Option<SortReport>,
    pub located: Option<Located>,
    pub config: Option<TowerConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_status(mut self, status: StoreStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_sort_report(mut self, report: SortReport) -> Self {
        self.sort_report = Some(report);
        self
    }

    pub fn with_config(mut self, config: TowerConfig) -> Self {
        self.config = Some(config);
        self
    }
}

pub(crate) fn status_of(store: &crate::store::RecordStore) -> StoreStatus {
    StoreStatus {
        len: store.len(),
        capacity: store.capacity(),
        order: store.last_order(),
    }
}
