use crate::error::{Result, TowerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest name or category the console accepts, in characters.
pub const MAX_FIELD_LEN: usize = 29;

/// Record priority in `1..=10`. Lower values are more important: 1 is the
/// highest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const HIGHEST: Priority = Priority(1);
    pub const LOWEST: Priority = Priority(10);

    pub fn new(value: u8) -> Result<Self> {
        if (Self::HIGHEST.0..=Self::LOWEST.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TowerError::InvalidInput(format!(
                "priority must be between {} and {}, got {}",
                Self::HIGHEST.0,
                Self::LOWEST.0,
                value
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Priority {
    type Error = TowerError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl FromStr for Priority {
    type Err = TowerError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| TowerError::InvalidInput(format!("not a number: {:?}", trimmed)))?;
        let value = u8::try_from(value).map_err(|_| {
            TowerError::InvalidInput(format!(
                "priority must be between {} and {}, got {}",
                Self::HIGHEST.0,
                Self::LOWEST.0,
                value
            ))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tower component: what it is called, what kind of part it is, and how
/// urgently it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub category: String,
    pub priority: Priority,
}

impl Record {
    pub fn new(name: impl Into<String>, category: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            priority,
        }
    }
}

/// Which ordering, if any, currently holds for a store's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Order {
    #[default]
    Unordered,
    ByName,
    ByCategory,
    ByPriority,
}

impl Order {
    pub fn label(self) -> &'static str {
        match self {
            Order::Unordered => "unordered",
            Order::ByName => "by name",
            Order::ByCategory => "by category",
            Order::ByPriority => "by priority",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
