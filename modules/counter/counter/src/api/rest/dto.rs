//! REST DTOs for the counter module.

use calckit::number::lenient_f64;
use calculator_sdk::Operation;
use chrono::{DateTime, Utc};
use counter_sdk::{CalculationEvent, CalculationRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::DomainError;

/// Notification of one successful calculation.
///
/// Same operand rules as the calculator endpoint. `result` is optional; without it
/// the counter evaluates the operation to get the stored result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RecordCalculationRequest {
    #[serde(default, alias = "num1", deserialize_with = "lenient_f64")]
    #[schema(value_type = Option<f64>, example = 5)]
    pub operand1: Option<f64>,
    #[serde(default, alias = "num2", deserialize_with = "lenient_f64")]
    #[schema(value_type = Option<f64>, example = 7)]
    pub operand2: Option<f64>,
    #[schema(example = "add")]
    pub operation: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schema(value_type = Option<f64>, example = 12)]
    pub result: Option<f64>,
}

impl RecordCalculationRequest {
    /// # Errors
    /// [`DomainError::Validation`] for a missing field or an unknown operation.
    pub fn into_event(self) -> Result<CalculationEvent, DomainError> {
        let operation = self
            .operation
            .ok_or_else(|| DomainError::validation("operation", "is required"))?;
        let operation: Operation = operation
            .parse()
            .map_err(|e: calculator_sdk::CalculationError| {
                DomainError::validation("operation", e.to_string())
            })?;
        let operand1 = self
            .operand1
            .ok_or_else(|| DomainError::validation("operand1", "is required"))?;

        Ok(CalculationEvent {
            operation,
            operand1,
            operand2: self.operand2,
            result: self.result,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordCalculationResponse {
    #[schema(example = "Count updated successfully")]
    pub message: String,
    #[schema(example = "5 add 7")]
    pub calculation_id: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationRecordDto {
    pub calculation_id: String,
    pub expression: String,
    pub representative_result: f64,
    pub count: u64,
    pub last_updated_at: DateTime<Utc>,
}

impl From<CalculationRecord> for CalculationRecordDto {
    fn from(r: CalculationRecord) -> Self {
        Self {
            calculation_id: r.calculation_id,
            expression: r.expression,
            representative_result: r.representative_result,
            count: r.count,
            last_updated_at: r.last_updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalCalculationsResponse {
    pub total_calculations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RecordCalculationRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn into_event_accepts_original_payload_shape() {
        let event = parse(r#"{"num1":5,"num2":null,"operation":"sqrt"}"#)
            .into_event()
            .unwrap();
        assert_eq!(event.operation, Operation::Sqrt);
        assert_eq!(event.operand2, None);
        assert_eq!(event.result, None);
    }

    #[test]
    fn into_event_rejects_unknown_operation() {
        let err = parse(r#"{"operand1":5,"operation":"modulo"}"#)
            .into_event()
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "operation", .. }));
    }

    #[test]
    fn into_event_requires_operand1() {
        let err = parse(r#"{"operation":"add","operand2":1}"#)
            .into_event()
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "operand1", .. }));
    }
}
