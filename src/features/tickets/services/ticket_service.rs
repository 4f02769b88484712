use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::TicketResponseDto;
use crate::features::tickets::models::{NewTicket, Ticket, TicketChanges, TicketFilter};

const TICKET_COLUMNS: &str = "id, title, description, category, priority, status, created_at";

/// Escape `%`, `_` and `\` so a search term matches literally in ILIKE
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Builds the list query: exact-match filters, every search term must hit
/// title or description, newest first.
fn build_list_query(filter: &TicketFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder =
        QueryBuilder::new(format!("SELECT {} FROM tickets WHERE TRUE", TICKET_COLUMNS));

    if let Some(category) = filter.category {
        builder.push(" AND category = ").push_bind(category);
    }
    if let Some(priority) = filter.priority {
        builder.push(" AND priority = ").push_bind(priority);
    }
    if let Some(status) = filter.status {
        builder.push(" AND status = ").push_bind(status);
    }

    for term in filter.search_terms() {
        let pattern = format!("%{}%", escape_like(term));
        builder
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    builder.push(" ORDER BY created_at DESC, id DESC");
    builder
}

/// Service for ticket operations
pub struct TicketService {
    pool: PgPool,
}

impl TicketService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a ticket; id and created_at are assigned here and by the database
    pub async fn create(&self, new_ticket: NewTicket) -> Result<TicketResponseDto> {
        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            r#"
            INSERT INTO tickets (id, title, description, category, priority, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            TICKET_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(&new_ticket.title)
        .bind(&new_ticket.description)
        .bind(new_ticket.category)
        .bind(new_ticket.priority)
        .bind(new_ticket.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create ticket: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Ticket created: id={}, category={}, priority={}",
            ticket.id,
            ticket.category,
            ticket.priority
        );

        Ok(ticket.into())
    }

    /// List tickets matching the filter, newest first
    pub async fn list(&self, filter: &TicketFilter) -> Result<Vec<TicketResponseDto>> {
        let mut query = build_list_query(filter);
        let tickets = query
            .build_query_as::<Ticket>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list tickets: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(tickets.into_iter().map(|t| t.into()).collect())
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<TicketResponseDto> {
        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            "SELECT {} FROM tickets WHERE id = $1",
            TICKET_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get ticket by ID: {:?}", e);
            AppError::Database(e)
        })?;

        ticket
            .map(|t| t.into())
            .ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", id)))
    }

    /// Apply changes to a ticket; unset fields keep their stored value
    pub async fn update(&self, id: Uuid, changes: TicketChanges) -> Result<TicketResponseDto> {
        let ticket = sqlx::query_as::<_, Ticket>(&format!(
            r#"
            UPDATE tickets
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                priority = COALESCE($5, priority),
                status = COALESCE($6, status)
            WHERE id = $1
            RETURNING {}
            "#,
            TICKET_COLUMNS
        ))
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.category)
        .bind(changes.priority)
        .bind(changes.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update ticket: {:?}", e);
            AppError::Database(e)
        })?;

        let ticket =
            ticket.ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", id)))?;

        tracing::info!("Ticket updated: id={}, status={}", ticket.id, ticket.status);

        Ok(ticket.into())
    }

    /// Delete ticket by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete ticket: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Ticket '{}' not found", id)));
        }

        tracing::info!("Ticket deleted: id={}", id);
        Ok(())
    }
}
