//! Ticket redirect request and response types.
//!
//! The listing page collects an email address before sending the visitor to
//! the external ticket provider. The backend records the interaction and
//! answers with the provider URL.

use serde::{Deserialize, Serialize};

use super::event::EventId;

/// Body of `POST /api/ticket-redirect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRedirectRequest {
    pub email: String,
    pub event_id: EventId,
    /// Whether the visitor agreed to receive further emails.
    #[serde(default)]
    pub opt_in: bool,
}

/// Successful answer of `POST /api/ticket-redirect`.
///
/// `redirect_url` is passed through as-is: scraped events sometimes carry a
/// provider reference rather than an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRedirectResponse {
    pub redirect_url: String,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
