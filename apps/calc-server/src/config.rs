//! Layered server configuration.
//!
//! Precedence, lowest first: built-in defaults, the YAML file given with `--config`,
//! `CALC__*` environment variables (`__` separates nesting levels, e.g.
//! `CALC__COUNTER__DATABASE__DSN`), then command-line overrides.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context as _, Result};
use calckit::{CorsConfig, LoggingConfig, build_cors_layer};
use calculator::config::CalculatorConfig;
use counter::config::CounterConfig;
use counter::infra::storage::db::DatabaseConfig;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Yaml};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "CALC__";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// How long a clean stop waits for in-flight count notifications.
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
            shutdown_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// # Errors
    /// Fails when `bind_addr` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr '{}'", self.bind_addr))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub calculator: CalculatorConfig,
    pub counter: CounterConfig,
}

impl AppConfig {
    /// Defaults, then `path` (if any), then the environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    /// Fails when a layer does not parse or names an unknown key.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    /// Apply `--port` and `--mock`.
    ///
    /// # Errors
    /// Fails when the configured bind address cannot take a port override.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, mock: bool) -> Result<()> {
        if let Some(port) = port {
            let mut addr = self.server.socket_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        if mock {
            self.counter.database = DatabaseConfig::in_memory();
        }
        Ok(())
    }

    /// Checks that cannot be expressed by deserialization alone.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        build_cors_layer(&self.cors).context("invalid cors section")?;
        if self.counter.scan_page_size == 0 {
            anyhow::bail!("counter.scan_page_size must be at least 1");
        }
        if self.counter.database.dsn.trim().is_empty() {
            anyhow::bail!("counter.database.dsn must not be empty");
        }
        Ok(())
    }
}
