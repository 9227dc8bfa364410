//! REST DTOs for the calculator module.

use calckit::number::lenient_f64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to evaluate one operation.
///
/// Operands may be sent as numbers or numeric strings. `num1`/`num2` are accepted
/// as aliases of `operand1`/`operand2`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CalculateRequest {
    #[serde(default, alias = "num1", deserialize_with = "lenient_f64")]
    #[schema(value_type = Option<f64>, example = 5)]
    pub operand1: Option<f64>,
    /// Required for binary operations, ignored by unary ones.
    #[serde(default, alias = "num2", deserialize_with = "lenient_f64")]
    #[schema(value_type = Option<f64>, example = 7)]
    pub operand2: Option<f64>,
    /// Operation tag, e.g. `add` or `celsius_to_fahrenheit`.
    #[schema(example = "add")]
    pub operation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    pub result: f64,
}
