pub mod classification_handler;
pub mod stats_handler;
pub mod ticket_handler;

pub use classification_handler::*;
pub use stats_handler::*;
pub use ticket_handler::*;
