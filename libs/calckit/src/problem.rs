//! Error body returned by every REST endpoint.
//!
//! Handlers return `Result<_, Problem>`; modules implement `From<DomainError> for Problem`
//! so `?` maps their errors onto a status code and a stable machine-readable `code`.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON error payload: `{"error": "...", "code": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem")]
#[must_use]
pub struct Problem {
    /// HTTP status of this occurrence. Carried by the response line, not the body.
    #[serde(skip, default = "default_status")]
    pub status: StatusCode,
    /// Human-readable message, safe to show to clients.
    pub error: String,
    /// Machine-readable error code, e.g. `CALC_DIVISION_BY_ZERO`.
    pub code: String,
    /// Span id of the request that failed, when one was active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

fn default_status() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

impl Problem {
    pub fn new(status: StatusCode, code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            code: code.into(),
            trace_id: None,
        }
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach the id of the current tracing span, if any.
    pub fn with_current_span(self) -> Self {
        match tracing::Span::current().id() {
            Some(id) => self.with_trace_id(id.into_u64().to_string()),
            None => self,
        }
    }
}

pub fn bad_request(code: impl Into<String>, error: impl Into<String>) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, code, error)
}

pub fn not_found(code: impl Into<String>, error: impl Into<String>) -> Problem {
    Problem::new(StatusCode::NOT_FOUND, code, error)
}

/// 500 with a generic message. Callers log the real cause before building it.
pub fn internal_error(code: impl Into<String>) -> Problem {
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        code,
        "An internal error occurred",
    )
}

impl axum::response::IntoResponse for Problem {
    fn into_response(self) -> axum::response::Response {
        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp
    }
}
