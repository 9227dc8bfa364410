//! Counter Module Implementation
//!
//! Counts how often each distinct calculation has been performed and sums those
//! counts on demand. The public API is defined in `counter-sdk` and re-exported here.

pub use counter_sdk::{CalculationEvent, CalculationRecord, CounterClient, CounterError};

pub mod module;
pub use api::rest::routes::CounterApiDoc;
pub use module::CounterModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
