use serde::{Deserialize, Serialize};

use crate::infra::storage::db::DatabaseConfig;

/// Configuration for the counter module.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    pub database: DatabaseConfig,
    /// Records fetched per page when totalling the store.
    pub scan_page_size: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            scan_page_size: 500,
        }
    }
}
