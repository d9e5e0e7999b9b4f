//! Backend seams used by the page and the ticket flow.
//!
//! Both traits are implemented for [`PageClient`]; tests substitute
//! in-memory doubles.

use async_trait::async_trait;
use louder_sdk::client::{ClientError, PageClient};
use louder_sdk::objects::{Event, TicketRedirectRequest, TicketRedirectResponse};

/// Source of the three startup collections.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<Event>, ClientError>;

    async fn fetch_categories(&self) -> Result<Vec<Option<String>>, ClientError>;

    async fn fetch_venues(&self) -> Result<Vec<Option<String>>, ClientError>;
}

/// Exchanges a collected email for the ticket provider URL.
#[async_trait]
pub trait TicketRedirector: Send + Sync {
    async fn request_redirect(
        &self,
        request: &TicketRedirectRequest,
    ) -> Result<TicketRedirectResponse, ClientError>;
}

#[async_trait]
impl EventSource for PageClient {
    async fn fetch_events(&self) -> Result<Vec<Event>, ClientError> {
        self.list_events().await
    }

    async fn fetch_categories(&self) -> Result<Vec<Option<String>>, ClientError> {
        self.list_categories().await
    }

    async fn fetch_venues(&self) -> Result<Vec<Option<String>>, ClientError> {
        self.list_venues().await
    }
}

#[async_trait]
impl TicketRedirector for PageClient {
    async fn request_redirect(
        &self,
        request: &TicketRedirectRequest,
    ) -> Result<TicketRedirectResponse, ClientError> {
        self.request_ticket_redirect(request).await
    }
}
