use crate::error::{Result, TowerError};
use crate::model::MAX_FIELD_LEN;
use crate::store::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for towerkit, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TowerConfig {
    /// Maximum number of records the store holds
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Names longer than this are clipped when read from the console
    #[serde(default = "default_field_len")]
    pub name_max_len: usize,

    /// Categories longer than this are clipped when read from the console
    #[serde(default = "default_field_len")]
    pub category_max_len: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_field_len() -> usize {
    MAX_FIELD_LEN
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            name_max_len: MAX_FIELD_LEN,
            category_max_len: MAX_FIELD_LEN,
        }
    }
}

impl TowerConfig {
    pub const KEYS: [&'static str; 3] = ["capacity", "name-max-len", "category-max-len"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TowerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        self.validate()?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.list_all() {
            if value == 0 {
                return Err(TowerError::Config(format!("{} must be at least 1", key)));
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        match key {
            "capacity" => Some(self.capacity),
            "name-max-len" => Some(self.name_max_len),
            "category-max-len" => Some(self.category_max_len),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = match key {
            "capacity" => &mut self.capacity,
            "name-max-len" => &mut self.name_max_len,
            "category-max-len" => &mut self.category_max_len,
            other => return Err(TowerError::Config(format!("Unknown config key: {}", other))),
        };

        let parsed: usize = value.trim().parse().map_err(|_| {
            TowerError::Config(format!("{} expects a positive number, got {:?}", key, value))
        })?;
        if parsed == 0 {
            return Err(TowerError::Config(format!("{} must be at least 1", key)));
        }
        *slot = parsed;
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("capacity", self.capacity),
            ("name-max-len", self.name_max_len),
            ("category-max-len", self.category_max_len),
        ]
    }
}
