mod ticket;

pub use ticket::{
    NewTicket, Ticket, TicketCategory, TicketChanges, TicketFilter, TicketPriority, TicketStatus,
};
