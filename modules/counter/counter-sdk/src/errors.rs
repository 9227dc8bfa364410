/// Errors returned by [`crate::CounterClient`].
///
/// `Storage` deliberately carries no detail: the cause is logged by the module
/// and never crosses the API boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    #[error("invalid calculation: {0}")]
    Validation(String),

    #[error("calculation not found: {0}")]
    NotFound(String),

    #[error("counter storage is unavailable")]
    Storage,

    #[error("internal error")]
    Internal,
}
