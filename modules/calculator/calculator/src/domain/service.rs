use calculator_sdk::{CalculationRequest, Operation};
use tracing::{debug, instrument};

use super::error::DomainError;
use super::notifier::CountNotifier;

/// Domain service that dispatches calculations.
///
/// Holds no per-request state; the optional notifier is the only collaborator.
pub struct Service {
    notifier: Option<CountNotifier>,
}

impl Service {
    #[must_use]
    pub fn new(notifier: Option<CountNotifier>) -> Self {
        Self { notifier }
    }

    /// Parse `operation`, validate the operands and evaluate.
    ///
    /// On success the count notification is submitted exactly once, after the
    /// result is known. Failures notify nothing.
    ///
    /// # Errors
    /// - [`DomainError::Validation`] for a non-finite operand
    /// - [`DomainError::Calculation`] for an unknown operation or a refused calculation
    #[instrument(skip(self))]
    pub fn compute(
        &self,
        operation: &str,
        operand1: f64,
        operand2: Option<f64>,
    ) -> Result<f64, DomainError> {
        let operation: Operation = operation.parse()?;
        let request = CalculationRequest::new(operation, operand1, operand2);
        ensure_finite("operand1", request.operand1)?;
        if let Some(b) = request.operand2 {
            ensure_finite("operand2", b)?;
        }

        let result = request.compute().inspect_err(|e| {
            debug!(error = %e, "Calculation refused");
        })?;

        debug!(result, "Calculation succeeded");

        if let Some(notifier) = &self.notifier {
            notifier.notify(&request, result);
        }

        Ok(result)
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::validation(field, "must be a finite number"))
    }
}
