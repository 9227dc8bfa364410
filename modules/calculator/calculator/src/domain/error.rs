use calculator_sdk::CalculationError;

/// Domain-specific errors for the calculator.
///
/// Every variant is the caller's fault and maps to a 400 response.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error on field '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "CALC_VALIDATION",
            Self::Calculation(e) => e.code(),
        }
    }
}
