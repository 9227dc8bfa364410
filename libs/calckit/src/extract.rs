//! JSON body extractor that answers malformed payloads with a [`Problem`].

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::problem::{Problem, bad_request};

/// Error code used for bodies that cannot be parsed at all.
pub const MALFORMED_BODY_CODE: &str = "MALFORMED_BODY";

/// Drop-in replacement for [`axum::Json`] as a request extractor.
///
/// Axum's own rejection answers with plain text; this keeps every failure in the
/// `{error, code}` shape and with a 400 status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_problem(&rejection)),
        }
    }
}

fn rejection_to_problem(rejection: &JsonRejection) -> Problem {
    tracing::debug!(error = %rejection, "rejected request body");
    bad_request(MALFORMED_BODY_CODE, rejection.body_text())
}
