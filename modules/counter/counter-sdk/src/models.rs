//! Public models for the counter module.

use calculator_sdk::{CalculationRequest, Operation};
use chrono::{DateTime, Utc};

/// Notification that a calculation succeeded.
///
/// `result` is the value the calculator returned. It is optional so that callers
/// which only know the request can still be counted; the counter then evaluates
/// the operation itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationEvent {
    pub operation: Operation,
    pub operand1: f64,
    pub operand2: Option<f64>,
    pub result: Option<f64>,
}

impl CalculationEvent {
    #[must_use]
    pub fn from_request(request: &CalculationRequest, result: f64) -> Self {
        Self {
            operation: request.operation,
            operand1: request.operand1,
            operand2: request.operand2,
            result: Some(result),
        }
    }
}

/// One row of the counter store.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    /// Canonical id, e.g. `"2 add 3"` or `"sqrt(9)"`.
    pub calculation_id: String,
    /// Human-readable form, e.g. `"2 + 3"`.
    pub expression: String,
    /// Result stored on first occurrence; later occurrences leave it untouched.
    pub representative_result: f64,
    /// Number of occurrences, always at least 1.
    pub count: u64,
    pub last_updated_at: DateTime<Utc>,
}
