use counter_sdk::CounterError;

/// Domain-specific errors for the counter.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("Validation error on field '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Calculation not found: {calculation_id}")]
    NotFound { calculation_id: String },

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn storage(message: impl std::fmt::Display) -> Self {
        Self::Storage(anyhow::anyhow!("{message}"))
    }
}

/// Storage detail stays inside the module.
impl From<DomainError> for CounterError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { .. } => CounterError::Validation(e.to_string()),
            DomainError::NotFound { calculation_id } => CounterError::NotFound(calculation_id),
            DomainError::Storage(cause) => {
                let detail = format!("{cause:#}");
                tracing::error!(error = %detail, "Counter storage failure");
                CounterError::Storage
            }
            DomainError::Unexpected(msg) => {
                tracing::error!(error = %msg, "Unexpected counter failure");
                CounterError::Internal
            }
        }
    }
}
