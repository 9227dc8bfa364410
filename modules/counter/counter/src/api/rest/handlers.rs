use std::sync::Arc;

use axum::extract::Path;
use axum::{Extension, Json};
use calckit::{ApiJson, Problem};

use crate::domain::aggregator::Aggregator;
use crate::domain::service::Service;

use super::dto::{
    CalculationRecordDto, RecordCalculationRequest, RecordCalculationResponse,
    TotalCalculationsResponse,
};

/// Count one occurrence of a calculation.
#[utoipa::path(
    post,
    path = "/counter/v1/calculations",
    tag = "counter",
    request_body = RecordCalculationRequest,
    responses(
        (status = 200, description = "Count updated", body = RecordCalculationResponse),
        (status = 400, description = "Invalid calculation", body = Problem),
        (status = 500, description = "Counter store unavailable", body = Problem),
    )
)]
pub async fn record_calculation(
    Extension(svc): Extension<Arc<Service>>,
    ApiJson(req): ApiJson<RecordCalculationRequest>,
) -> Result<Json<RecordCalculationResponse>, Problem> {
    let record = svc.record_event(req.into_event()?).await?;
    Ok(Json(RecordCalculationResponse {
        message: "Count updated successfully".to_owned(),
        calculation_id: record.calculation_id,
        count: record.count,
    }))
}

/// Fetch the record stored under a canonical calculation id, e.g. `5 add 7`.
#[utoipa::path(
    get,
    path = "/counter/v1/calculations/{calculation_id}",
    tag = "counter",
    params(("calculation_id" = String, Path, description = "Canonical calculation id")),
    responses(
        (status = 200, description = "Stored record", body = CalculationRecordDto),
        (status = 404, description = "No such calculation", body = Problem),
        (status = 500, description = "Counter store unavailable", body = Problem),
    )
)]
pub async fn get_calculation(
    Extension(svc): Extension<Arc<Service>>,
    Path(calculation_id): Path<String>,
) -> Result<Json<CalculationRecordDto>, Problem> {
    let record = svc.get(&calculation_id).await?;
    Ok(Json(record.into()))
}

/// Sum of the counts of every stored calculation.
#[utoipa::path(
    get,
    path = "/counter/v1/total",
    tag = "counter",
    responses(
        (status = 200, description = "Total number of calculations", body = TotalCalculationsResponse),
        (status = 500, description = "Counter store unavailable", body = Problem),
    )
)]
pub async fn total_calculations(
    Extension(aggregator): Extension<Arc<Aggregator>>,
) -> Result<Json<TotalCalculationsResponse>, Problem> {
    let total_calculations = aggregator.total_count().await?;
    Ok(Json(TotalCalculationsResponse { total_calculations }))
}
