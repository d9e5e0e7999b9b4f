pub mod event;
pub mod ticket;

pub use event::{Event, EventId, EventsQuery};
pub use ticket::{ApiErrorBody, TicketRedirectRequest, TicketRedirectResponse};
