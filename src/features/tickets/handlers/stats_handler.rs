use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::tickets::dtos::StatsReportDto;
use crate::features::tickets::services::StatsService;

/// Aggregate statistics over all tickets
#[utoipa::path(
    get,
    path = "/api/tickets/stats/",
    responses(
        (status = 200, description = "Ticket statistics", body = StatsReportDto)
    ),
    tag = "tickets"
)]
pub async fn get_stats(State(service): State<Arc<StatsService>>) -> Result<Json<StatsReportDto>> {
    let stats = service.compute_stats().await?;
    Ok(Json(stats))
}
