use calckit::problem::{Problem, bad_request};

use crate::domain::error::DomainError;

/// Map a domain error to a `Problem`. Every calculator failure is a client error.
pub fn domain_error_to_problem(e: &DomainError) -> Problem {
    tracing::debug!(error = %e, "Calculation request rejected");
    bad_request(e.code(), e.to_string()).with_current_span()
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e)
    }
}
