use serde::{Deserialize, Serialize};

/// Configuration for the calculator module.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Send a count notification for every successful calculation.
    pub notifications_enabled: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
        }
    }
}
