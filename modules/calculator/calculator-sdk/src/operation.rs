//! The operation table.
//!
//! Every supported operation is a variant of [`Operation`]; adding a variant forces
//! every `match` below to handle it. The only way to get an "unknown operation" is
//! parsing a tag that names none of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalculationError;

/// How many operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Sin,
    Cos,
    Tan,
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
        Operation::CelsiusToFahrenheit,
        Operation::FahrenheitToCelsius,
    ];

    /// Wire tag of the operation, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Tan => "tan",
            Operation::CelsiusToFahrenheit => "celsius_to_fahrenheit",
            Operation::FahrenheitToCelsius => "fahrenheit_to_celsius",
        }
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => Arity::Binary,
            Operation::Sqrt
            | Operation::Sin
            | Operation::Cos
            | Operation::Tan
            | Operation::CelsiusToFahrenheit
            | Operation::FahrenheitToCelsius => Arity::Unary,
        }
    }

    /// Infix symbol for binary operations, used in human-readable expressions.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Operation::Add => Some("+"),
            Operation::Subtract => Some("-"),
            Operation::Multiply => Some("*"),
            Operation::Divide => Some("/"),
            Operation::Power => Some("^"),
            Operation::Sqrt
            | Operation::Sin
            | Operation::Cos
            | Operation::Tan
            | Operation::CelsiusToFahrenheit
            | Operation::FahrenheitToCelsius => None,
        }
    }

    /// Evaluate the operation.
    ///
    /// `operand2` is ignored by unary operations. Trigonometric operations take
    /// degrees.
    ///
    /// # Errors
    /// - [`CalculationError::MissingOperand`] for a binary operation without `operand2`
    /// - [`CalculationError::DivisionByZero`] when dividing by zero
    /// - [`CalculationError::NegativeSqrt`] for the square root of a negative number
    /// - [`CalculationError::NonFiniteResult`] when the result is infinite or NaN
    pub fn apply(self, operand1: f64, operand2: Option<f64>) -> Result<f64, CalculationError> {
        let result = match self.arity() {
            Arity::Binary => {
                let b = operand2.ok_or(CalculationError::MissingOperand { operation: self })?;
                self.apply_binary(operand1, b)?
            }
            Arity::Unary => self.apply_unary(operand1)?,
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalculationError::NonFiniteResult { operation: self })
        }
    }

    fn apply_binary(self, a: f64, b: f64) -> Result<f64, CalculationError> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => {
                if b == 0.0 {
                    return Err(CalculationError::DivisionByZero);
                }
                Ok(a / b)
            }
            Operation::Power => Ok(a.powf(b)),
            unary => unary.apply_unary(a),
        }
    }

    fn apply_unary(self, a: f64) -> Result<f64, CalculationError> {
        match self {
            Operation::Sqrt => {
                if a < 0.0 {
                    return Err(CalculationError::NegativeSqrt { operand: a });
                }
                Ok(a.sqrt())
            }
            Operation::Sin => Ok(a.to_radians().sin()),
            Operation::Cos => Ok(a.to_radians().cos()),
            Operation::Tan => Ok(a.to_radians().tan()),
            Operation::CelsiusToFahrenheit => Ok(a * 9.0 / 5.0 + 32.0),
            Operation::FahrenheitToCelsius => Ok((a - 32.0) * 5.0 / 9.0),
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => Err(CalculationError::MissingOperand { operation: self }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CalculationError::UnknownOperation(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn tags_round_trip_through_from_str() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert_eq!(err, CalculationError::UnknownOperation("modulo".to_owned()));
        assert!("ADD".parse::<Operation>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&Operation::CelsiusToFahrenheit).unwrap();
        assert_eq!(json, r#""celsius_to_fahrenheit""#);
    }

    #[test]
    fn add_is_commutative() {
        let ab = Operation::Add.apply(2.0, Some(3.0)).unwrap();
        let ba = Operation::Add.apply(3.0, Some(2.0)).unwrap();
        assert_close(ab, 5.0);
        assert_close(ba, 5.0);
    }

    #[test]
    fn multiply_is_commutative() {
        let ab = Operation::Multiply.apply(-4.5, Some(2.0)).unwrap();
        let ba = Operation::Multiply.apply(2.0, Some(-4.5)).unwrap();
        assert_close(ab, -9.0);
        assert_close(ba, ab);
    }

    #[test]
    fn subtract_and_divide() {
        assert_close(Operation::Subtract.apply(10.0, Some(4.0)).unwrap(), 6.0);
        assert_close(Operation::Divide.apply(10.0, Some(4.0)).unwrap(), 2.5);
    }

    #[test]
    fn divide_by_zero_fails_for_every_dividend() {
        for x in [0.0, 1.0, -1.0, 1e300, -7.25] {
            assert_eq!(
                Operation::Divide.apply(x, Some(0.0)),
                Err(CalculationError::DivisionByZero)
            );
        }
        assert_eq!(
            Operation::Divide.apply(3.0, Some(-0.0)),
            Err(CalculationError::DivisionByZero)
        );
    }

    #[test]
    fn binary_operations_require_second_operand() {
        for op in Operation::ALL.into_iter().filter(|op| op.arity() == Arity::Binary) {
            assert_eq!(
                op.apply(2.0, None),
                Err(CalculationError::MissingOperand { operation: op })
            );
        }
    }

    #[test]
    fn power() {
        assert_close(Operation::Power.apply(2.0, Some(10.0)).unwrap(), 1024.0);
        assert_close(Operation::Power.apply(9.0, Some(0.5)).unwrap(), 3.0);
    }

    #[test]
    fn non_finite_results_are_rejected() {
        assert_eq!(
            Operation::Power.apply(10.0, Some(400.0)),
            Err(CalculationError::NonFiniteResult {
                operation: Operation::Power
            })
        );
        assert_eq!(
            Operation::Power.apply(-8.0, Some(1.0 / 3.0)),
            Err(CalculationError::NonFiniteResult {
                operation: Operation::Power
            })
        );
        assert!(Operation::Multiply.apply(f64::MAX, Some(2.0)).is_err());
    }

    #[test]
    fn sqrt_of_negative_is_a_domain_error() {
        assert_eq!(
            Operation::Sqrt.apply(-1.0, None),
            Err(CalculationError::NegativeSqrt { operand: -1.0 })
        );
        assert_close(Operation::Sqrt.apply(9.0, None).unwrap(), 3.0);
        assert_close(Operation::Sqrt.apply(0.0, None).unwrap(), 0.0);
    }

    #[test]
    fn unary_operations_ignore_second_operand() {
        assert_close(Operation::Sqrt.apply(16.0, Some(100.0)).unwrap(), 4.0);
    }

    #[test]
    fn trig_takes_degrees() {
        assert_close(Operation::Sin.apply(30.0, None).unwrap(), 0.5);
        assert_close(Operation::Cos.apply(60.0, None).unwrap(), 0.5);
        assert_close(Operation::Tan.apply(45.0, None).unwrap(), 1.0);
        assert_close(Operation::Sin.apply(0.0, None).unwrap(), 0.0);
    }

    #[test]
    fn temperature_conversions() {
        assert_close(
            Operation::CelsiusToFahrenheit.apply(100.0, None).unwrap(),
            212.0,
        );
        assert_close(Operation::CelsiusToFahrenheit.apply(-40.0, None).unwrap(), -40.0);
        assert_close(Operation::FahrenheitToCelsius.apply(212.0, None).unwrap(), 100.0);
        assert_close(Operation::FahrenheitToCelsius.apply(32.0, None).unwrap(), 0.0);
    }

    #[test]
    fn symbols_exist_only_for_binary_operations() {
        for op in Operation::ALL {
            assert_eq!(op.symbol().is_some(), op.arity() == Arity::Binary, "{op}");
        }
    }
}
