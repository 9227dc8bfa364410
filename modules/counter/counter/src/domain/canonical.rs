//! Canonical calculation keys.
//!
//! Two requests that describe the same calculation must land on the same key, so
//! every number in a key goes through [`format_operand`] and nothing else.

use calculator_sdk::{Arity, Operation};

/// Render an operand for use in a key or expression.
///
/// Shortest decimal string that parses back to the same `f64`, with no exponent
/// and no fractional part for integral values: `5.0` and `5` both give `"5"`,
/// `0.1 + 0.2` gives `"0.30000000000000004"`. Negative zero renders as `"0"`.
#[must_use]
pub fn format_operand(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Primary key of a calculation.
///
/// Unary: `"sqrt(9)"`. Binary: `"2 add 3"`; a missing second operand leaves the
/// slot empty (`"2 add "`).
#[must_use]
pub fn canonical_id(operation: Operation, operand1: f64, operand2: Option<f64>) -> String {
    let a = format_operand(operand1);
    match operation.arity() {
        Arity::Unary => format!("{operation}({a})"),
        Arity::Binary => {
            let b = operand2.map(format_operand).unwrap_or_default();
            format!("{a} {operation} {b}")
        }
    }
}

/// Human-readable form stored next to the key: `"2 + 3"` or `"sqrt(9)"`.
#[must_use]
pub fn expression(operation: Operation, operand1: f64, operand2: Option<f64>) -> String {
    let a = format_operand(operand1);
    match (operation.arity(), operation.symbol()) {
        (Arity::Binary, Some(symbol)) => {
            let b = operand2.map(format_operand).unwrap_or_default();
            format!("{a} {symbol} {b}")
        }
        _ => format!("{operation}({a})"),
    }
}
