//! In-process implementation of the counter SDK.

use std::sync::Arc;

use async_trait::async_trait;
use counter_sdk::{CalculationEvent, CalculationRecord, CounterClient, CounterError};

use crate::domain::aggregator::Aggregator;
use crate::domain::service::Service;

/// Calls the domain service directly, without going through HTTP.
pub struct LocalClient {
    service: Arc<Service>,
    aggregator: Arc<Aggregator>,
}

impl LocalClient {
    pub fn new(service: Arc<Service>, aggregator: Arc<Aggregator>) -> Self {
        Self {
            service,
            aggregator,
        }
    }
}

#[async_trait]
impl CounterClient for LocalClient {
    async fn record(&self, event: CalculationEvent) -> Result<CalculationRecord, CounterError> {
        self.service.record_event(event).await.map_err(Into::into)
    }

    async fn get(&self, calculation_id: &str) -> Result<CalculationRecord, CounterError> {
        self.service.get(calculation_id).await.map_err(Into::into)
    }

    async fn total_count(&self) -> Result<u64, CounterError> {
        self.aggregator.total_count().await.map_err(Into::into)
    }
}
