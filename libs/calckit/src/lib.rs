//! Calckit
//!
//! Plumbing shared by the calculator and counter modules and the server binary:
//! - `problem` - the `{error, code}` response body and status mapping
//! - `extract` - `ApiJson`, a JSON extractor that rejects with a `Problem`
//! - `cors` - CORS policy config and layer builder
//! - `logging` - `tracing` subscriber bootstrap
//! - `number` - lenient operand deserialization for request bodies
//! - `signals` - which termination signal stopped the server

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod cors;
pub mod extract;
pub mod logging;
pub mod number;
pub mod problem;
pub mod signals;

pub use cors::{CorsConfig, CorsConfigError, build_cors_layer};
pub use extract::ApiJson;
pub use logging::{LogFormat, LoggingConfig, LoggingGuard, init_logging};
pub use problem::Problem;
pub use signals::{ShutdownSignal, wait_for_shutdown};
