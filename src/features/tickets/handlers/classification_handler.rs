use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::tickets::dtos::{ClassificationResultDto, ClassifyTicketDto};
use crate::features::tickets::services::ClassificationService;
use crate::shared::types::ErrorResponse;

/// Suggest a category and priority for a ticket description
///
/// When the completion service fails the default suggestion is returned
/// with a `warning`.
#[utoipa::path(
    post,
    path = "/api/tickets/classify/",
    request_body = ClassifyTicketDto,
    responses(
        (status = 200, description = "Suggestion, or defaults with a warning", body = ClassificationResultDto),
        (status = 400, description = "Description is required", body = ErrorResponse),
        (status = 503, description = "LLM API key not configured", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn classify_ticket(
    State(service): State<Arc<ClassificationService>>,
    AppJson(dto): AppJson<ClassifyTicketDto>,
) -> Result<Json<ClassificationResultDto>> {
    let credentials = service.credentials();
    let result = service
        .classify(&credentials, dto.description.as_deref())
        .await?;
    Ok(Json(result))
}
