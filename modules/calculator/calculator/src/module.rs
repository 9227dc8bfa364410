//! Calculator module definition.
//!
//! Owns the domain service and the notifier feeding the counter module.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use counter_sdk::CounterClient;

use crate::api::rest::routes;
use crate::config::CalculatorConfig;
use crate::domain::notifier::CountNotifier;
use crate::domain::service::Service;

pub struct CalculatorModule {
    service: Arc<Service>,
    notifier: Option<CountNotifier>,
}

impl CalculatorModule {
    /// Wire the module. `counter` receives one event per successful calculation
    /// unless notifications are disabled in `cfg`.
    pub fn new(cfg: &CalculatorConfig, counter: Arc<dyn CounterClient>) -> Self {
        tracing::info!(
            notifications = cfg.notifications_enabled,
            "Initializing calculator module"
        );

        let notifier = cfg
            .notifications_enabled
            .then(|| CountNotifier::new(counter));
        let service = Arc::new(Service::new(notifier.clone()));

        Self { service, notifier }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    #[must_use]
    pub fn router(&self) -> Router {
        tracing::info!("Registering calculator REST routes");
        routes::register_routes(Router::new(), self.service())
    }

    /// Wait up to `timeout` for in-flight count notifications.
    ///
    /// Returns `false` if some were still pending when the timeout elapsed.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        match &self.notifier {
            Some(notifier) => notifier.shutdown(timeout).await,
            None => true,
        }
    }
}
