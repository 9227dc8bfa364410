//! Router composition and the HTTP server loop.

use std::time::Duration;

use anyhow::{Context as _, Result};
use axum::routing::get;
use axum::{Json, Router};
use calckit::{ShutdownSignal, build_cors_layer, wait_for_shutdown};
use calculator::{CalculatorApiDoc, CalculatorModule};
use counter::{CounterApiDoc, CounterModule};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi as _;

use crate::config::{AppConfig, ServerConfig};

/// Both modules wired together behind one router.
pub struct App {
    router: Router,
    calculator: CalculatorModule,
}

impl App {
    /// Initialize the counter store, then the calculator on top of its client.
    ///
    /// # Errors
    /// Fails when the database is unreachable or the CORS section is invalid.
    pub async fn build(cfg: &AppConfig) -> Result<Self> {
        let counter = CounterModule::init(&cfg.counter).await?;
        let calculator = CalculatorModule::new(&cfg.calculator, counter.client());

        let mut router = Router::new()
            .route("/health", get(health))
            .route("/openapi.json", get(openapi_json))
            .merge(calculator.router())
            .merge(counter.router())
            .layer(TraceLayer::new_for_http());

        if let Some(cors) = build_cors_layer(&cfg.cors)? {
            router = router.layer(cors);
        }

        Ok(Self { router, calculator })
    }

    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Wait for in-flight count notifications, bounded by `timeout`.
    pub async fn drain(&self, timeout: Duration) {
        if self.calculator.shutdown(timeout).await {
            tracing::info!("Count notifications drained");
        } else {
            tracing::warn!("Some count notifications were dropped on shutdown");
        }
    }
}

/// Serve until Ctrl+C / SIGTERM, then drain notifications.
///
/// # Errors
/// Fails when the listener cannot bind or the server loop errors out.
pub async fn serve(app: &App, cfg: &ServerConfig) -> Result<()> {
    let stop = async {
        wait_for_shutdown()
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, "Signal handling failed, shutting down");
            })
            .ok()
    };
    serve_until(app, cfg, stop).await.map(|_| ())
}

/// Serve until `stop` resolves, then drain notifications.
///
/// Returns the signal `stop` reported, `None` when it could not tell.
///
/// # Errors
/// Fails when the listener cannot bind or the server loop errors out.
pub async fn serve_until<F>(
    app: &App,
    cfg: &ServerConfig,
    stop: F,
) -> Result<Option<ShutdownSignal>>
where
    F: Future<Output = Option<ShutdownSignal>> + Send + 'static,
{
    let addr = cfg.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

    let (signal_tx, signal_rx) = oneshot::channel();
    axum::serve(listener, app.router())
        .with_graceful_shutdown(async move {
            let _ = signal_tx.send(stop.await);
        })
        .await
        .context("HTTP server failed")?;

    let signal = signal_rx.await.ok().flatten();
    tracing::info!(
        signal = signal.map_or("unknown", ShutdownSignal::as_str),
        timeout_secs = cfg.shutdown_timeout_secs,
        "Stopped accepting requests, draining count notifications"
    );
    app.drain(Duration::from_secs(cfg.shutdown_timeout_secs)).await;
    tracing::info!("HTTP server stopped");
    Ok(signal)
}

/// Combined OpenAPI document of both modules.
#[must_use]
pub fn openapi_doc() -> utoipa::openapi::OpenApi {
    let mut doc = CalculatorApiDoc::openapi();
    doc.merge(CounterApiDoc::openapi());
    doc.info = utoipa::openapi::Info::new("calc-server", env!("CARGO_PKG_VERSION"));
    doc
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi_doc())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
