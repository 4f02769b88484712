use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::tickets::models::{
    NewTicket, Ticket, TicketCategory, TicketChanges, TicketFilter, TicketPriority, TicketStatus,
};

/// Response DTO for ticket
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            category: t.category,
            priority: t.priority,
            status: t.status,
            created_at: t.created_at,
        }
    }
}

/// Request DTO for creating a ticket
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTicketDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub title: String,
    #[validate(custom(function = "crate::shared::validation::validate_not_blank"))]
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    /// Defaults to `open`
    #[serde(default)]
    pub status: Option<TicketStatus>,
}

impl From<CreateTicketDto> for NewTicket {
    fn from(dto: CreateTicketDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description.trim().to_string(),
            category: dto.category,
            priority: dto.priority,
            status: dto.status.unwrap_or_default(),
        }
    }
}

/// Request DTO for a full update (PUT); omitted status keeps the stored value
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ReplaceTicketDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub title: String,
    #[validate(custom(function = "crate::shared::validation::validate_not_blank"))]
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    #[serde(default)]
    pub status: Option<TicketStatus>,
}

impl From<ReplaceTicketDto> for TicketChanges {
    fn from(dto: ReplaceTicketDto) -> Self {
        Self {
            title: Some(dto.title.trim().to_string()),
            description: Some(dto.description.trim().to_string()),
            category: Some(dto.category),
            priority: Some(dto.priority),
            status: dto.status,
        }
    }
}

/// Request DTO for a partial update (PATCH)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PatchTicketDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"),
        custom(function = "crate::shared::validation::validate_not_blank")
    )]
    pub title: Option<String>,
    #[validate(custom(function = "crate::shared::validation::validate_not_blank"))]
    pub description: Option<String>,
    pub category: Option<TicketCategory>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
}

impl From<PatchTicketDto> for TicketChanges {
    fn from(dto: PatchTicketDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description.map(|d| d.trim().to_string()),
            category: dto.category,
            priority: dto.priority,
            status: dto.status,
        }
    }
}

/// Empty filter values (`?status=`) mean "no filter"
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Query params for listing tickets
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTicketsQuery {
    /// Exact match on category
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<TicketCategory>,
    /// Exact match on priority
    #[serde(default, deserialize_with = "empty_as_none")]
    pub priority: Option<TicketPriority>,
    /// Exact match on status
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<TicketStatus>,
    /// Case-insensitive search in title and description; every word must match
    pub search: Option<String>,
}

impl From<ListTicketsQuery> for TicketFilter {
    fn from(query: ListTicketsQuery) -> Self {
        Self {
            category: query.category,
            priority: query.priority,
            status: query.status,
            search: query.search,
        }
    }
}
