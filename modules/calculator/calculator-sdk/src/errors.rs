use crate::operation::Operation;

/// Why a calculation was refused.
///
/// All variants are caused by the request itself; none of them indicates a fault
/// in the service.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Square root of a negative number ({operand}) is not defined")]
    NegativeSqrt { operand: f64 },

    #[error("Operation '{operation}' requires two operands")]
    MissingOperand { operation: Operation },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Result of '{operation}' is not a finite number")]
    NonFiniteResult { operation: Operation },
}

impl CalculationError {
    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "CALC_DIVISION_BY_ZERO",
            Self::NegativeSqrt { .. } => "CALC_NEGATIVE_SQRT",
            Self::MissingOperand { .. } => "CALC_MISSING_OPERAND",
            Self::UnknownOperation(_) => "CALC_UNKNOWN_OPERATION",
            Self::NonFiniteResult { .. } => "CALC_NON_FINITE_RESULT",
        }
    }
}
