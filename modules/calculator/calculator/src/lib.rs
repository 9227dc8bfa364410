//! Calculator Module Implementation
//!
//! Dispatches calculation requests to the operation table from `calculator-sdk`
//! and reports every successful calculation to the counter module without
//! waiting for it.

pub use calculator_sdk::{CalculationError, CalculationRequest, Operation};

pub mod module;
pub use api::rest::routes::CalculatorApiDoc;
pub use module::CalculatorModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
