use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::handlers;
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::calculate),
    tags((name = "calculator", description = "Arithmetic, trigonometry and unit conversions"))
)]
pub struct CalculatorApiDoc;

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/calculator/v1/calculate", post(handlers::calculate))
        .layer(Extension(service))
}
