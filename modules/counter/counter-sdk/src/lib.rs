//! Counter SDK
//!
//! This crate provides everything needed to talk to the counter module:
//! - API trait (`CounterClient`)
//! - Models (`CalculationEvent`, `CalculationRecord`)
//! - Error type (`CounterError`)
//!
//! The calculator module holds an `Arc<dyn CounterClient>` and submits one
//! `CalculationEvent` per successful calculation.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::CounterClient;
pub use errors::CounterError;
pub use models::{CalculationEvent, CalculationRecord};
