use crate::model::Order;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TowerError {
    #[error("Store is full (capacity {capacity})")]
    Full { capacity: usize },

    /// `comparisons` is set when a binary search spent probes before missing.
    #[error("Record not found: {name}")]
    NotFound {
        name: String,
        comparisons: Option<u64>,
    },

    #[error("Binary search requires records ordered by name (current order: {current})")]
    PreconditionViolated { current: Order },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TowerError>;
