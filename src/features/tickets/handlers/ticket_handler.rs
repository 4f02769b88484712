use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::tickets::dtos::{
    CreateTicketDto, ListTicketsQuery, PatchTicketDto, ReplaceTicketDto, TicketResponseDto,
};
use crate::features::tickets::services::TicketService;
use crate::shared::types::ErrorResponse;

/// List tickets, newest first
#[utoipa::path(
    get,
    path = "/api/tickets/",
    params(ListTicketsQuery),
    responses(
        (status = 200, description = "List of tickets", body = Vec<TicketResponseDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(service): State<Arc<TicketService>>,
    AppQuery(query): AppQuery<ListTicketsQuery>,
) -> Result<Json<Vec<TicketResponseDto>>> {
    let tickets = service.list(&query.into()).await?;
    Ok(Json(tickets))
}

/// Create a ticket
#[utoipa::path(
    post,
    path = "/api/tickets/",
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    AppJson(dto): AppJson<CreateTicketDto>,
) -> Result<(StatusCode, Json<TicketResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ticket = service.create(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/api/tickets/{id}/",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket found", body = TicketResponseDto),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = service.get_by_id(id).await?;
    Ok(Json(ticket))
}

/// Replace a ticket's editable fields
#[utoipa::path(
    put,
    path = "/api/tickets/{id}/",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    request_body = ReplaceTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = TicketResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn replace_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ReplaceTicketDto>,
) -> Result<Json<TicketResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ticket = service.update(id, dto.into()).await?;
    Ok(Json(ticket))
}

/// Update some fields of a ticket
#[utoipa::path(
    patch,
    path = "/api/tickets/{id}/",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    request_body = PatchTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = TicketResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn patch_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<PatchTicketDto>,
) -> Result<Json<TicketResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let ticket = service.update(id, dto.into()).await?;
    Ok(Json(ticket))
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}/",
    params(
        ("id" = Uuid, Path, description = "Ticket ID")
    ),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
