//! Support tickets: CRUD, filtering and search, statistics, and
//! category/priority suggestions from a completion service.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/tickets/` | List tickets (filters: category, priority, status, search) |
//! | POST | `/api/tickets/` | Create ticket |
//! | GET | `/api/tickets/{id}/` | Get ticket |
//! | PUT | `/api/tickets/{id}/` | Replace ticket fields |
//! | PATCH | `/api/tickets/{id}/` | Update some ticket fields |
//! | DELETE | `/api/tickets/{id}/` | Delete ticket |
//! | GET | `/api/tickets/stats/` | Aggregate statistics |
//! | POST | `/api/tickets/classify/` | Suggest category and priority |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ClassificationService, StatsService, TicketService};
