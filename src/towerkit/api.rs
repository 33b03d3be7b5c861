//! # API Facade
//!
//! [`TowerApi`] is the single entry point for every towerkit operation. It
//! owns the [`RecordStore`] for the lifetime of the program and dispatches to
//! the command layer.
//!
//! The facade normalizes inputs (trimming names, parsing priorities) and
//! returns structured [`CmdResult`] values. It does no I/O and holds no
//! business logic of its own; the menu in the binary is one client of it.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::Priority;
use crate::sort::SortKey;
use crate::store::RecordStore;
use std::path::PathBuf;

pub struct TowerApi {
    store: RecordStore,
    config_dir: PathBuf,
}

impl TowerApi {
    pub fn new(store: RecordStore, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            config_dir: config_dir.into(),
        }
    }

    pub fn add_record(
        &mut self,
        name: &str,
        category: &str,
        priority: Priority,
    ) -> Result<CmdResult> {
        commands::add::run(
            &mut self.store,
            name.trim().to_string(),
            category.trim().to_string(),
            priority,
        )
    }

    pub fn remove_record(&mut self, name: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, name.trim())
    }

    pub fn list_records(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn sort_records(&mut self, key: SortKey) -> Result<CmdResult> {
        commands::sort::run(&mut self.store, key)
    }

    /// Binary search by name. Callers should check
    /// `store().last_order()` first; a store not sorted by name yields
    /// [`crate::error::TowerError::PreconditionViolated`].
    pub fn locate_record(&self, query: &str) -> Result<CmdResult> {
        commands::locate::run(&self.store, query.trim())
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, DisplayRecord, MessageLevel, StoreStatus};
