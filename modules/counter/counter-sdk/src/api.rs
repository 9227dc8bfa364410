use async_trait::async_trait;

use crate::errors::CounterError;
use crate::models::{CalculationEvent, CalculationRecord};

/// Public API of the counter module.
///
/// Implemented in-process by the module's `LocalClient`; other transports only
/// need to implement this trait.
#[async_trait]
pub trait CounterClient: Send + Sync {
    /// Count one occurrence of a calculation, creating its record on first sight.
    async fn record(&self, event: CalculationEvent) -> Result<CalculationRecord, CounterError>;

    /// Fetch the record stored under a canonical calculation id.
    async fn get(&self, calculation_id: &str) -> Result<CalculationRecord, CounterError>;

    /// Sum of the counts of every stored record.
    async fn total_count(&self) -> Result<u64, CounterError>;
}
