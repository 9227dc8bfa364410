use std::sync::Arc;

use axum::{Extension, Json};
use calckit::{ApiJson, Problem};

use crate::domain::error::DomainError;
use crate::domain::service::Service;

use super::dto::{CalculateRequest, CalculateResponse};

/// Evaluate one operation.
#[utoipa::path(
    post,
    path = "/calculator/v1/calculate",
    tag = "calculator",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculateResponse),
        (status = 400, description = "Invalid request or refused calculation", body = Problem),
    )
)]
pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    ApiJson(req): ApiJson<CalculateRequest>,
) -> Result<Json<CalculateResponse>, Problem> {
    let operation = req
        .operation
        .ok_or_else(|| DomainError::validation("operation", "is required"))?;
    let operand1 = req
        .operand1
        .ok_or_else(|| DomainError::validation("operand1", "is required"))?;

    let result = svc.compute(&operation, operand1, req.operand2)?;
    Ok(Json(CalculateResponse { result }))
}
