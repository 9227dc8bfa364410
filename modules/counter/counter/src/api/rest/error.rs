use calckit::problem::{Problem, bad_request, internal_error, not_found};

use crate::domain::error::DomainError;

/// Map a domain error to a `Problem`. Storage detail is logged, never returned.
pub fn domain_error_to_problem(e: &DomainError) -> Problem {
    let problem = match e {
        DomainError::Validation { .. } => {
            tracing::debug!(error = %e, "Counter request rejected");
            bad_request("COUNTER_VALIDATION", e.to_string())
        }
        DomainError::NotFound { .. } => not_found("COUNTER_NOT_FOUND", e.to_string()),
        DomainError::Storage(_) => {
            tracing::error!(error = %e, "Counter storage error occurred");
            internal_error("COUNTER_STORAGE")
        }
        DomainError::Unexpected(_) => {
            tracing::error!(error = %e, "Unexpected counter error");
            internal_error("COUNTER_INTERNAL")
        }
    };
    problem.with_current_span()
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e)
    }
}
