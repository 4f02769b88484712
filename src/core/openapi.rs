use utoipa::{Modify, OpenApi};

use crate::features::tickets::{
    dtos as tickets_dtos, handlers as tickets_handlers, models as tickets_models,
};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Tickets
        tickets_handlers::list_tickets,
        tickets_handlers::create_ticket,
        tickets_handlers::get_ticket,
        tickets_handlers::replace_ticket,
        tickets_handlers::patch_ticket,
        tickets_handlers::delete_ticket,
        // Stats
        tickets_handlers::get_stats,
        // Classification
        tickets_handlers::classify_ticket,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Tickets
            tickets_models::TicketCategory,
            tickets_models::TicketPriority,
            tickets_models::TicketStatus,
            tickets_dtos::TicketResponseDto,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::ReplaceTicketDto,
            tickets_dtos::PatchTicketDto,
            tickets_dtos::StatsReportDto,
            tickets_dtos::ClassifyTicketDto,
            tickets_dtos::ClassificationResultDto,
        )
    ),
    tags(
        (name = "tickets", description = "Support tickets, statistics and classification"),
    ),
    info(
        title = "Helpdesk API",
        version = "0.1.0",
        description = "API documentation for the helpdesk ticket service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_ticket_routes() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/api/tickets/",
            "/api/tickets/{id}/",
            "/api/tickets/stats/",
            "/api/tickets/classify/",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Support Desk".to_string(),
            version: "2.0.0".to_string(),
            description: "Internal".to_string(),
        }
        .modify(&mut openapi);

        assert_eq!(openapi.info.title, "Support Desk");
        assert_eq!(openapi.info.version, "2.0.0");
        assert_eq!(openapi.info.description.as_deref(), Some("Internal"));
    }
}
