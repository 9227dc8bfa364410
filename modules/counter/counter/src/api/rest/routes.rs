use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::handlers;
use crate::domain::aggregator::Aggregator;
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::record_calculation,
        handlers::get_calculation,
        handlers::total_calculations
    ),
    tags((name = "counter", description = "Per-expression calculation counts and totals"))
)]
pub struct CounterApiDoc;

pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    aggregator: Arc<Aggregator>,
) -> Router {
    router
        .route("/counter/v1/calculations", post(handlers::record_calculation))
        .route(
            "/counter/v1/calculations/{calculation_id}",
            get(handlers::get_calculation),
        )
        .route("/counter/v1/total", get(handlers::total_calculations))
        .layer(Extension(service))
        .layer(Extension(aggregator))
}
