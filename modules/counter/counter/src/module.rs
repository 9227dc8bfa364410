//! Counter module definition.

use std::sync::Arc;

use axum::Router;
use counter_sdk::CounterClient;
use sea_orm::DatabaseConnection;

use crate::api::rest::routes;
use crate::config::CounterConfig;
use crate::domain::aggregator::Aggregator;
use crate::domain::service::Service;
use crate::infra::storage::db;
use crate::infra::storage::sea_orm_repo::SeaOrmCounterRepository;
use crate::local_client::LocalClient;

pub struct CounterModule {
    service: Arc<Service>,
    aggregator: Arc<Aggregator>,
}

impl CounterModule {
    /// Connect to the configured database, migrate it and wire the module.
    ///
    /// # Errors
    /// Fails when the database cannot be reached or migrated.
    pub async fn init(cfg: &CounterConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing counter module");
        let conn = db::connect(&cfg.database).await?;
        Ok(Self::from_connection(conn, cfg))
    }

    /// Wire the module on top of an already migrated connection.
    #[must_use]
    pub fn from_connection(conn: DatabaseConnection, cfg: &CounterConfig) -> Self {
        let repo = Arc::new(SeaOrmCounterRepository::new(conn));
        let service = Arc::new(Service::new(repo.clone()));
        let aggregator = Arc::new(Aggregator::new(repo, cfg.scan_page_size));

        tracing::info!(scan_page_size = cfg.scan_page_size, "counter module initialized");
        Self {
            service,
            aggregator,
        }
    }

    /// In-process client for other modules.
    #[must_use]
    pub fn client(&self) -> Arc<dyn CounterClient> {
        Arc::new(LocalClient::new(
            Arc::clone(&self.service),
            Arc::clone(&self.aggregator),
        ))
    }

    #[must_use]
    pub fn router(&self) -> Router {
        tracing::info!("Registering counter REST routes");
        routes::register_routes(
            Router::new(),
            Arc::clone(&self.service),
            Arc::clone(&self.aggregator),
        )
    }
}
