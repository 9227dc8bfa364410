//! Fire-and-forget count notifications.

use std::sync::Arc;
use std::time::Duration;

use calculator_sdk::CalculationRequest;
use counter_sdk::{CalculationEvent, CounterClient};
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

/// Submits one counter update per successful calculation.
///
/// Each notification runs as its own task; the caller never waits for it and never
/// sees its outcome. A failed update is logged and dropped, there is no retry.
#[derive(Clone)]
pub struct CountNotifier {
    counter: Arc<dyn CounterClient>,
    tracker: TaskTracker,
}

impl CountNotifier {
    pub fn new(counter: Arc<dyn CounterClient>) -> Self {
        Self {
            counter,
            tracker: TaskTracker::new(),
        }
    }

    /// Spawn the counter update for `request` and return immediately.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn notify(&self, request: &CalculationRequest, result: f64) {
        let event = CalculationEvent::from_request(request, result);
        let counter = Arc::clone(&self.counter);

        self.tracker.spawn(async move {
            match counter.record(event).await {
                Ok(record) => debug!(
                    calculation_id = %record.calculation_id,
                    count = record.count,
                    "Calculation counted"
                ),
                Err(e) => warn!(
                    error = %e,
                    operation = %event.operation,
                    "Failed to count calculation"
                ),
            }
        });
    }

    /// Number of notifications still in flight.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Close the tracker and wait for in-flight notifications.
    ///
    /// Returns `false` when `timeout` elapsed first; the remaining tasks are left
    /// to the runtime.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        self.tracker.close();
        if tokio::time::timeout(timeout, self.tracker.wait()).await.is_ok() {
            debug!("All count notifications delivered");
            true
        } else {
            warn!(
                pending = self.tracker.len(),
                "Timed out waiting for count notifications"
            );
            false
        }
    }
}
