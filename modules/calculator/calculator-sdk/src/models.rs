//! Public models for the calculator module.

use crate::errors::CalculationError;
use crate::operation::{Arity, Operation};

/// A calculation whose operation tag has already been resolved.
///
/// `operand2` is always `None` for unary operations, whatever the caller sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    pub operation: Operation,
    pub operand1: f64,
    pub operand2: Option<f64>,
}

impl CalculationRequest {
    #[must_use]
    pub fn new(operation: Operation, operand1: f64, operand2: Option<f64>) -> Self {
        let operand2 = match operation.arity() {
            Arity::Binary => operand2,
            Arity::Unary => None,
        };
        Self {
            operation,
            operand1,
            operand2,
        }
    }

    /// Evaluate the request.
    ///
    /// # Errors
    /// See [`Operation::apply`].
    pub fn compute(&self) -> Result<f64, CalculationError> {
        self.operation.apply(self.operand1, self.operand2)
    }
}
