mod classification_dto;
mod stats_dto;
mod ticket_dto;

pub use classification_dto::{ClassificationResultDto, ClassifyTicketDto};
pub use stats_dto::StatsReportDto;
pub use ticket_dto::{
    CreateTicketDto, ListTicketsQuery, PatchTicketDto, ReplaceTicketDto, TicketResponseDto,
};
