pub mod classification_service;
pub mod stats_service;
pub mod ticket_service;

pub use classification_service::ClassificationService;
pub use stats_service::StatsService;
pub use ticket_service::TicketService;
