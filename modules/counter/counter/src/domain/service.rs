use std::sync::Arc;

use chrono::Utc;
use calculator_sdk::Arity;
use counter_sdk::{CalculationEvent, CalculationRecord};
use tracing::{debug, info, instrument};

use super::canonical;
use super::error::DomainError;
use super::repo::{CounterRepository, NewCalculation};

/// Domain service that counts calculations.
///
/// All concurrency control lives in [`CounterRepository::increment_or_insert`];
/// the service keeps no state between calls.
pub struct Service {
    repo: Arc<dyn CounterRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn CounterRepository>) -> Self {
        Self { repo }
    }

    /// Count one occurrence of the calculation stored under `calculation_id`.
    ///
    /// # Errors
    /// - [`DomainError::Validation`] for an empty id or a non-finite result
    /// - [`DomainError::Storage`] when the store fails or holds a malformed row
    #[instrument(skip(self, expression))]
    pub async fn record(
        &self,
        calculation_id: &str,
        expression: &str,
        representative_result: f64,
    ) -> Result<CalculationRecord, DomainError> {
        if calculation_id.is_empty() {
            return Err(DomainError::validation("calculation_id", "must not be empty"));
        }
        if !representative_result.is_finite() {
            return Err(DomainError::validation(
                "result",
                "must be a finite number",
            ));
        }

        let record = self
            .repo
            .increment_or_insert(
                NewCalculation {
                    calculation_id: calculation_id.to_owned(),
                    expression: expression.to_owned(),
                    representative_result,
                },
                Utc::now(),
            )
            .await?;

        if record.count == 1 {
            info!(calculation_id, "New calculation, added to store");
        } else {
            info!(calculation_id, count = record.count, "Calculation found, count updated");
        }
        Ok(record)
    }

    /// Derive the key of `event` and count it.
    ///
    /// When the event carries no result the operation is evaluated here.
    ///
    /// # Errors
    /// As [`Service::record`]; an event whose calculation cannot be evaluated is a
    /// [`DomainError::Validation`].
    pub async fn record_event(
        &self,
        event: CalculationEvent,
    ) -> Result<CalculationRecord, DomainError> {
        let CalculationEvent {
            operation,
            operand1,
            operand2,
            result,
        } = event;

        let operand2 = match operation.arity() {
            Arity::Binary => operand2,
            Arity::Unary => None,
        };
        for (field, value) in [("operand1", Some(operand1)), ("operand2", operand2)] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(DomainError::validation(field, "must be a finite number"));
            }
        }

        let result = match result {
            Some(result) => result,
            None => {
                debug!(%operation, "Event carries no result, evaluating");
                operation
                    .apply(operand1, operand2)
                    .map_err(|e| DomainError::validation("operation", e.to_string()))?
            }
        };

        let calculation_id = canonical::canonical_id(operation, operand1, operand2);
        let expression = canonical::expression(operation, operand1, operand2);
        self.record(&calculation_id, &expression, result).await
    }

    /// # Errors
    /// [`DomainError::NotFound`] when nothing is stored under `calculation_id`.
    pub async fn get(&self, calculation_id: &str) -> Result<CalculationRecord, DomainError> {
        self.repo
            .find(calculation_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                calculation_id: calculation_id.to_owned(),
            })
    }
}
