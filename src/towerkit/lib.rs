//! # Towerkit
//!
//! Towerkit keeps the small inventory of components needed to assemble the
//! rescue tower. Each component is a [`model::Record`] with a name, a category
//! and a priority from 1 (most urgent) to 10. The inventory can be sorted with
//! three classic algorithms, each reporting how many comparisons it made and
//! how long it took, and searched by name with a binary search once it is in
//! name order.
//!
//! Like any UI-agnostic library, the core never prints: the interactive menu
//! in the `towerkit` binary is just one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (binary: cli/)                                         │
//! │  - clap arguments, menu loop, input re-prompting, rendering │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - owns the store, normalizes input, returns CmdResult      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - add, remove, list, sort, locate, config                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, sort.rs, locate.rs, collation.rs)            │
//! │  - bounded record store with its order marker               │
//! │  - bubble / insertion / selection sorts, binary search      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Order Marker
//!
//! The store tracks which sort last ordered it. Adding or removing a record
//! clears the marker. Binary search refuses to run unless the marker says
//! "by name", so sort by name first:
//!
//! ```rust
//! use towerkit::locate::locate;
//! use towerkit::model::{Priority, Record};
//! use towerkit::sort::sort_by_name;
//! use towerkit::store::RecordStore;
//!
//! let mut store = RecordStore::new();
//! store.add(Record::new("Motor", "propulsao", Priority::new(5)?))?;
//! store.add(Record::new("Antena", "controle", Priority::new(2)?))?;
//! assert!(locate(&store, "antena").is_err());
//!
//! let report = sort_by_name(&mut store);
//! assert_eq!(report.comparisons, 1);
//!
//! let found = locate(&store, "antena")?;
//! assert_eq!(found.index, 0);
//! # Ok::<(), towerkit::error::TowerError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every client goes through
//! - [`commands`]: one module per user operation
//! - [`store`]: the bounded record store
//! - [`sort`]: the three sorters and their [`sort::SortReport`]
//! - [`locate`]: binary search by name
//! - [`collation`]: the case-insensitive comparison shared by all of the above
//! - [`model`]: `Record`, `Priority`, `Order`
//! - [`config`]: capacity and field limits, stored as JSON
//! - [`error`]: error types

pub mod api;
pub mod collation;
pub mod commands;
pub mod config;
pub mod error;
pub mod locate;
pub mod model;
pub mod sort;
pub mod store;
