//! Calculator SDK
//!
//! Contract types shared by the calculator module and its consumers:
//! - `Operation` - the closed set of supported operations and their pure math
//! - `CalculationRequest` - a validated request
//! - `CalculationError` - domain failures of a calculation
//!
//! ## Usage
//!
//! ```
//! use calculator_sdk::{CalculationRequest, Operation};
//!
//! let op: Operation = "add".parse()?;
//! let req = CalculationRequest::new(op, 2.0, Some(3.0));
//! assert_eq!(req.compute()?, 5.0);
//! # Ok::<(), calculator_sdk::CalculationError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod errors;
mod models;
mod operation;

pub use errors::CalculationError;
pub use models::CalculationRequest;
pub use operation::{Arity, Operation};
